//! checkbox values offered by the intake form. stored records may hold other
//! free-text values, e.g. the detail written for "기타".

pub const SYMPTOMS: [&str; 14] = [
    "발열",
    "오한",
    "두통",
    "인후통",
    "콧물",
    "기침",
    "호흡곤란",
    "복통/설사",
    "구토",
    "발진",
    "황달",
    "의식 저하",
    "점막 지속 출혈",
    "기타",
];

pub const OTHER_FLAGS: [&str; 3] = ["증상 관련 약 복용", "현지 병원 방문", "동물접촉"];
