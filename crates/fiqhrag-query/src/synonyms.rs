/// Common fiqh-domain synonyms for optional query-side expansion. Slice
/// ordering is the expansion ordering.
pub const FIQH_SYNONYMS: &[(&str, &[&str])] = &[
    ("حكم", &["أحكام", "فتوى", "رأي", "الحكم"]),
    ("الربا", &["الفائدة", "الزيادة"]),
    ("الزكاة", &["الصدقة"]),
    ("الحج", &["المناسك"]),
    ("البيع", &["التبادل", "المعاملة"]),
    ("الصلاة", &["الصلوات", "الشعيرة"]),
];
