//! Curated city → country overrides.
//!
//! Entries missing from the bulk dataset or commonly entered in forms:
//! Turkish provinces and Istanbul districts, abbreviations, region names
//! typed as cities. Seeded into the index before the bulk data, so they
//! are never shadowed by it. Keys go through the same normalization as
//! everything else, so ASCII spellings cover the diacritic variants.

pub const MANUAL_OVERRIDES: &[(&str, &str)] = &[
    // Turkey — provinces under-represented in the bulk dataset
    ("bursa", "Turkey"),
    ("izmir", "Turkey"),
    ("gaziantep", "Turkey"),
    ("kocaeli", "Turkey"),
    ("mugla", "Turkey"),
    ("aydin", "Turkey"),
    ("balikesir", "Turkey"),
    ("manisa", "Turkey"),
    ("denizli", "Turkey"),
    ("hatay", "Turkey"),
    ("maras", "Turkey"),
    ("kahramanmaras", "Turkey"),
    ("sanliurfa", "Turkey"),
    ("urfa", "Turkey"),
    ("diyarbakir", "Turkey"),
    ("mardin", "Turkey"),
    ("trabzon", "Turkey"),
    ("samsun", "Turkey"),
    ("ordu", "Turkey"),
    ("giresun", "Turkey"),
    ("rize", "Turkey"),
    ("artvin", "Turkey"),
    ("erzurum", "Turkey"),
    ("erzincan", "Turkey"),
    ("van", "Turkey"),
    ("mus", "Turkey"),
    ("agri", "Turkey"),
    ("kars", "Turkey"),
    ("igdir", "Turkey"),
    ("ardahan", "Turkey"),
    ("bitlis", "Turkey"),
    ("batman", "Turkey"),
    ("siirt", "Turkey"),
    ("sirnak", "Turkey"),
    ("hakkari", "Turkey"),
    ("elazig", "Turkey"),
    ("malatya", "Turkey"),
    ("tunceli", "Turkey"),
    ("bingol", "Turkey"),
    ("kayseri", "Turkey"),
    ("nevsehir", "Turkey"),
    ("nigde", "Turkey"),
    ("aksaray", "Turkey"),
    ("kirsehir", "Turkey"),
    ("yozgat", "Turkey"),
    ("sivas", "Turkey"),
    ("tokat", "Turkey"),
    ("amasya", "Turkey"),
    ("corum", "Turkey"),
    ("kastamonu", "Turkey"),
    ("sinop", "Turkey"),
    ("bartin", "Turkey"),
    ("karabuk", "Turkey"),
    ("zonguldak", "Turkey"),
    ("duzce", "Turkey"),
    ("bolu", "Turkey"),
    ("bilecik", "Turkey"),
    ("eskisehir", "Turkey"),
    ("kutahya", "Turkey"),
    ("usak", "Turkey"),
    ("afyon", "Turkey"),
    ("afyonkarahisar", "Turkey"),
    ("isparta", "Turkey"),
    ("burdur", "Turkey"),
    ("kirikkale", "Turkey"),
    ("cankiri", "Turkey"),
    ("bayburt", "Turkey"),
    ("gumushane", "Turkey"),
    // Istanbul districts seen in lead forms
    ("sisli", "Turkey"),
    ("fatih", "Turkey"),
    ("bahcelievler", "Turkey"),
    ("bahcelievler istanbul", "Turkey"),
    ("catalca", "Turkey"),
    // Portugal
    ("lisboa", "Portugal"),
    ("lisbon", "Portugal"),
    // USA — states and state-qualified entries typed as cities
    ("nj", "United States"),
    ("new jersey", "United States"),
    ("ga", "United States"),
    ("guyton ga", "United States"),
    ("lake wales florida", "United States"),
    ("melbourne australia victoria", "Australia"),
    // UK
    ("walkerburn", "United Kingdom"),
    // Nigeria
    ("ekiti", "Nigeria"),
    // Palestine
    ("gaza", "Palestine"),
    // New York variations
    ("new york", "United States"),
    ("ny", "United States"),
    // St. abbreviations
    ("st louis", "United States"),
    ("st thomas", "United States Virgin Islands"),
    ("st. francis", "United States"),
    ("montreal", "Canada"),
    ("padua", "Italy"),
    ("w bridgewater", "United States"),
    ("antwerp belgium", "Belgium"),
    ("longyearbyen", "Norway"),
];
