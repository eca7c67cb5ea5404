//! Fixed reference data for the demo seed.

/// `(name, code, population, area in km²)`
pub const COUNTIES: &[(&str, &str, i32, f64)] = &[
    ("Nairobi", "001", 4_397_073, 696.0),
    ("Kiambu", "023", 2_417_735, 2_449.0),
    ("Murang'a", "022", 1_056_640, 2_325.0),
    ("Nakuru", "033", 2_162_202, 7_496.0),
    ("Meru", "013", 1_545_714, 6_930.0),
    ("Nyeri", "021", 759_164, 3_337.0),
    ("Kirinyaga", "024", 610_411, 1_478.0),
    ("Embu", "014", 608_599, 2_555.0),
    ("Machakos", "029", 1_421_932, 6_281.0),
    ("Uasin Gishu", "035", 1_163_186, 3_345.0),
];

/// `(county code, name, code)`
pub const SUBCOUNTIES: &[(&str, &str, &str)] = &[
    ("001", "Westlands", "001001"),
    ("001", "Dagoretti North", "001002"),
    ("001", "Langata", "001003"),
    ("001", "Embakasi South", "001004"),
    ("023", "Thika Town", "023001"),
    ("023", "Ruiru", "023002"),
    ("023", "Limuru", "023003"),
    ("023", "Kikuyu", "023004"),
    ("023", "Gatundu South", "023005"),
    ("022", "Kangema", "022001"),
    ("022", "Mathioya", "022002"),
    ("022", "Kiharu", "022003"),
    ("022", "Maragwa", "022004"),
    ("033", "Nakuru Town East", "033001"),
    ("033", "Rongai", "033002"),
    ("033", "Naivasha", "033003"),
    ("013", "Imenti North", "013001"),
    ("013", "Imenti South", "013002"),
    ("013", "Tigania East", "013003"),
];

pub const FIRST_NAMES: &[&str] = &[
    "John", "Mary", "Peter", "Jane", "David", "Sarah", "James", "Lucy", "Michael", "Grace",
    "Daniel", "Ann", "Joseph", "Faith", "Samuel", "Ruth", "Brian", "Joyce", "Kevin", "Alice",
    "Patrick", "Rose", "Simon", "Catherine", "Paul", "Margaret", "Stephen", "Elizabeth", "Moses",
    "Hannah",
];

pub const LAST_NAMES: &[&str] = &[
    "Mwangi", "Wanjiku", "Kamau", "Njeri", "Kariuki", "Waithera", "Kimani", "Muthoni", "Omondi",
    "Akinyi", "Otieno", "Adhiambo", "Kipchoge", "Chepkemoi", "Mutua", "Nduku", "Ochieng", "Atieno",
    "Wekesa", "Nekesa",
];

pub const FARMERS: usize = 25;
pub const BUYERS: usize = 15;

pub const FARMING_TYPES: &[&str] = &["crop", "livestock", "mixed", "poultry", "horticulture"];
pub const EXPERIENCE_LEVELS: &[&str] = &["beginner", "intermediate", "experienced", "expert"];
pub const FARMING_METHODS: &[&str] = &["organic", "conventional", "mixed"];
pub const CERTIFICATIONS: &[&str] = &["GAP", "Organic", "GlobalGAP", "None"];
pub const BANKS: &[&str] = &["Equity Bank", "KCB", "Cooperative Bank", "NCBA"];

pub const BUYER_TYPES: &[&str] = &["individual", "restaurant", "hotel", "retailer", "wholesaler"];
pub const PREFERRED_PAYMENTS: &[&str] = &["mpesa", "bank_transfer", "cash"];

pub const SOIL_TYPES: &[&str] = &["Loam", "Clay", "Sandy", "Volcanic"];
pub const WATER_SOURCES: &[&str] = &["Borehole", "River", "Rain", "Municipal"];
pub const IRRIGATION_METHODS: &[&str] = &["Drip", "Sprinkler", "Flood", "None"];

/// `(name, description)`
pub const CROP_CATEGORIES: &[(&str, &str)] = &[
    ("cereals", "Cereal crops like maize, wheat, rice"),
    ("vegetables", "Vegetable crops"),
    ("fruits", "Fruit crops"),
    ("legumes", "Beans, peas, and other legumes"),
    ("tubers", "Root and tuber crops"),
    ("cash-crops", "Export and cash crops"),
];

/// `(name, scientific name, category, days to maturity)`
pub const CROPS: &[(&str, &str, &str, i32)] = &[
    ("maize", "Zea mays", "cereals", 120),
    ("wheat", "Triticum aestivum", "cereals", 140),
    ("rice", "Oryza sativa", "cereals", 150),
    ("tomatoes", "Solanum lycopersicum", "vegetables", 75),
    ("cabbage", "Brassica oleracea", "vegetables", 60),
    ("kale-sukuma-wiki", "Brassica oleracea", "vegetables", 45),
    ("spinach", "Spinacia oleracea", "vegetables", 40),
    ("onions", "Allium cepa", "vegetables", 90),
    ("bananas", "Musa acuminata", "fruits", 270),
    ("avocado", "Persea americana", "fruits", 365),
    ("mangoes", "Mangifera indica", "fruits", 365),
    ("beans", "Phaseolus vulgaris", "legumes", 90),
    ("peas", "Pisum sativum", "legumes", 75),
    ("potatoes", "Solanum tuberosum", "tubers", 105),
    ("sweet-potatoes", "Ipomoea batatas", "tubers", 120),
    ("coffee", "Coffea arabica", "cash-crops", 365),
    ("tea", "Camellia sinensis", "cash-crops", 365),
];

pub const GROWING_SEASONS: &[&str] = &["Long rains", "Short rains", "Year-round"];

/// `(name, abbreviation, conversion factor)`
pub const PRODUCT_UNITS: &[(&str, &str, &str)] = &[
    ("Kilogram", "kg", "1.0"),
    ("Bag (90kg)", "bag", "90.0"),
    ("Crate", "crate", "10.0"),
    ("Piece", "pc", "1.0"),
    ("Bunch", "bunch", "5.0"),
    ("Sack (50kg)", "sack", "50.0"),
];

pub const QUALITY_GRADES: &[&str] = &["premium", "grade_a", "grade_b", "standard"];
/// Weighted towards `active`.
pub const PRODUCT_STATUSES: &[&str] = &["active", "active", "active", "sold_out", "draft"];
pub const MINIMUM_ORDERS: &[i64] = &[1, 2, 5, 10];

pub const REVIEW_COMMENTS: &[&str] = &[
    "Great quality produce!",
    "Fresh and well packaged.",
    "Good value for money.",
    "Would buy again.",
    "Excellent service from the farmer.",
    "Product as described.",
    "Fast delivery and good quality.",
];
pub const REVIEW_MOODS: &[&str] = &["Satisfied", "Good", "Excellent"];
pub const REVIEWED_PRODUCTS: i64 = 50;

pub const MARKET_GRADES: &[&str] = &["Grade A", "Grade B", "Standard"];
pub const LEVELS: &[&str] = &["High", "Medium", "Low"];
pub const PRICE_TRENDS: &[&str] = &["Rising", "Stable", "Falling"];
pub const PRICE_SOURCES: &[&str] = &["Market Survey", "County Agriculture Office", "Cooperative"];
pub const PRICE_HISTORY_DAYS: i64 = 90;
pub const PRICE_INTERVAL_DAYS: usize = 7;
pub const COUNTIES_PER_CROP: usize = 3;

/// `(name, code, description, fee fraction, minimum, maximum)`
pub const PAYMENT_METHODS: &[(&str, &str, &str, &str, &str, Option<&str>)] = &[
    ("M-Pesa", "mpesa", "Safaricom mobile money", "0.0150", "10", Some("150000")),
    ("Bank Transfer", "bank_transfer", "Direct bank transfer", "0.0050", "1000", None),
    ("Cash on Delivery", "cod", "Pay the driver on delivery", "0", "0", Some("50000")),
    ("Card", "card", "Visa and Mastercard", "0.0290", "100", Some("500000")),
];

/// `(name, contact person, phone, email, pricing model, rating)`
pub const DELIVERY_PARTNERS: &[(&str, &str, &str, &str, &str, &str)] = &[
    ("Sendy Logistics", "Grace Wanjiku", "+254711000001", "ops@sendy.ke", "per_km", "4.50"),
    ("Fargo Courier", "Peter Otieno", "+254711000002", "dispatch@fargo.ke", "flat_rate", "4.20"),
    ("Shamba Express", "Mary Kamau", "+254711000003", "hello@shambaexpress.ke", "per_kg", "3.90"),
];
