pub mod system;
pub mod units;

const B: &str = "B";

const KB: &str = "KB";
const MB: &str = "MB";
const GB: &str = "GB";
const TB: &str = "TB";
const PB: &str = "PB";
const EB: &str = "EB";
const ZB: &str = "ZB";
const YB: &str = "YB";
const RB: &str = "RB";
const QB: &str = "QB";

const KIB: &str = "KiB";
const MIB: &str = "MiB";
const GIB: &str = "GiB";
const TIB: &str = "TiB";
const PIB: &str = "PiB";
const EIB: &str = "EiB";
const ZIB: &str = "ZiB";
const YIB: &str = "YiB";
