/// Well-known places in Ruse with their coordinates
/// Format: (Name, "latitude,longitude")
pub const RUSE_LANDMARKS: &[(&str, &str)] = &[
    ("Площад Свобода", "43.8484,25.9540"),
    ("Доходното здание", "43.8476,25.9535"),
    ("Пантеон на възрожденците", "43.8501,25.9640"),
    ("Централна гара", "43.8303,25.9609"),
    ("Дунав мост", "43.8862,25.9939"),
    ("Парк на младежта", "43.8375,25.9790"),
    ("Лесопарк Липник", "43.7672,26.0586"),
    ("Квартал Дружба 3", "43.8218,25.9890"),
];

/// Street addresses and neighbourhoods in the formats people type them
pub const RUSE_ADDRESSES: &[&str] = &[
    "ул. Александровска 57",
    "бул. Липник 6",
    "бул. Цар Освободител 117",
    "ул. Борисова 22",
    "пл. Свобода",
    "кв. Възраждане",
    "кв. Чародейка",
    "ж.к. Здравец Изток",
    "Alexandrovska 57",
];
