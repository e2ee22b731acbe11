//! Built-in station table.
//!
//! Major stations only. The complete table is published by the operator in
//! the `station_name` format and can be loaded with
//! [`StationDirectory::load`](super::StationDirectory::load).

/// (station name, telecode)
pub(super) const BUILTIN_STATIONS: &[(&str, &str)] = &[
    ("北京", "BJP"),
    ("北京南", "VNP"),
    ("北京西", "BXP"),
    ("上海", "SHH"),
    ("上海虹桥", "AOH"),
    ("天津", "TJP"),
    ("石家庄", "SJP"),
    ("太原", "TYV"),
    ("济南", "JNK"),
    ("青岛", "QDK"),
    ("沈阳", "SYT"),
    ("大连", "DLT"),
    ("长春", "CCT"),
    ("哈尔滨", "HBB"),
    ("南京", "NJH"),
    ("南京南", "NKH"),
    ("苏州", "SZH"),
    ("无锡", "WXH"),
    ("杭州", "HZH"),
    ("杭州东", "HGH"),
    ("合肥", "HFH"),
    ("福州", "FZS"),
    ("厦门", "XMS"),
    ("南昌", "NCG"),
    ("郑州", "ZZF"),
    ("郑州东", "ZAF"),
    ("武汉", "WHN"),
    ("汉口", "HKN"),
    ("武昌", "WCN"),
    ("长沙", "CSQ"),
    ("长沙南", "CWQ"),
    ("广州", "GZQ"),
    ("广州南", "IZQ"),
    ("深圳", "SZQ"),
    ("深圳北", "IOQ"),
    ("南宁", "NNZ"),
    ("成都", "CDW"),
    ("成都东", "ICW"),
    ("重庆", "CQW"),
    ("重庆北", "CUW"),
    ("贵阳", "GIW"),
    ("昆明", "KMM"),
    ("西安", "XAY"),
    ("西安北", "EAY"),
    ("兰州", "LZJ"),
];
