//! Geographic zone to calling-code heuristic
//!
//! A free-text zone hint ("Douala, Cameroun", "Paris 11e") is matched
//! against a fixed table of country and major-city substrings to pick the
//! calling code used for phone-number prefixing. First matching zone in
//! table order wins; veto terms disambiguate overlapping names (Niger vs
//! Nigeria, Congo vs its democratic neighbour). This is a best-effort bias,
//! not a geocoding service: it never calls out and never fails.

/// Calling code used when no hint is given or nothing matches
pub const DEFAULT_CALLING_CODE: &str = "+237";

/// One zone: a calling code, the lowercase substrings that select it, and
/// the substrings that veto the match
pub(crate) struct ZoneRule {
    pub calling_code: &'static str,
    pub terms: &'static [&'static str],
    pub veto: &'static [&'static str],
}

/// Zones relevant to the marketplace's user base, in priority order.
/// Accented and plain spellings both appear because hints arrive in either.
pub(crate) const GEO_ZONES: &[ZoneRule] = &[
    ZoneRule {
        calling_code: "+237",
        terms: &[
            "cameroun",
            "cameroon",
            "douala",
            "yaoundé",
            "yaounde",
            "bafoussam",
            "bamenda",
            "garoua",
            "maroua",
            "ngaoundéré",
            "ngaoundere",
            "bertoua",
            "ebolowa",
            "kribi",
            "limbe",
            "buea",
        ],
        veto: &[],
    },
    ZoneRule {
        calling_code: "+33",
        terms: &[
            "france",
            "paris",
            "marseille",
            "lyon",
            "toulouse",
            "nice",
            "nantes",
            "montpellier",
            "strasbourg",
            "bordeaux",
            "lille",
            "rennes",
        ],
        veto: &[],
    },
    ZoneRule {
        calling_code: "+225",
        terms: &[
            "côte",
            "cote",
            "ivoire",
            "ivory",
            "abidjan",
            "bouaké",
            "bouake",
            "yamoussoukro",
            "korhogo",
            "daloa",
        ],
        veto: &[],
    },
    ZoneRule {
        calling_code: "+221",
        terms: &[
            "sénégal",
            "senegal",
            "dakar",
            "thiès",
            "thies",
            "kaolack",
            "ziguinchor",
            "saint-louis",
        ],
        veto: &[],
    },
    ZoneRule {
        calling_code: "+223",
        terms: &["mali", "bamako", "sikasso", "mopti", "koutiala", "kayes"],
        veto: &[],
    },
    ZoneRule {
        calling_code: "+226",
        terms: &[
            "burkina",
            "faso",
            "ouagadougou",
            "bobo-dioulasso",
            "koudougou",
            "ouahigouya",
        ],
        veto: &[],
    },
    ZoneRule {
        calling_code: "+227",
        terms: &["niger", "niamey", "zinder", "maradi", "tahoua"],
        veto: &["nigeria"],
    },
    ZoneRule {
        calling_code: "+235",
        terms: &["tchad", "chad", "ndjamena", "moundou", "sarh", "abéché"],
        veto: &[],
    },
    ZoneRule {
        calling_code: "+236",
        terms: &["centrafricaine", "bangui", "berbérati", "carnot", "bambari"],
        veto: &[],
    },
    ZoneRule {
        calling_code: "+241",
        terms: &["gabon", "libreville", "port-gentil", "franceville", "oyem"],
        veto: &[],
    },
    ZoneRule {
        calling_code: "+242",
        terms: &["congo", "brazzaville", "pointe-noire", "dolisie"],
        veto: &["démocratique", "democratique", "democratic"],
    },
    ZoneRule {
        calling_code: "+243",
        terms: &[
            "démocratique",
            "democratique",
            "democratic",
            "kinshasa",
            "lubumbashi",
            "mbuji-mayi",
            "kisangani",
        ],
        veto: &[],
    },
    ZoneRule {
        calling_code: "+240",
        terms: &["équatoriale", "equatoriale", "equatorial", "malabo", "bata"],
        veto: &[],
    },
    ZoneRule {
        calling_code: "+1",
        terms: &[
            "canada",
            "toronto",
            "montreal",
            "vancouver",
            "calgary",
            "ottawa",
            "québec",
            "quebec",
            "winnipeg",
        ],
        veto: &[],
    },
    ZoneRule {
        calling_code: "+1",
        terms: &[
            "états-unis",
            "etats-unis",
            "usa",
            "united states",
            "new york",
            "los angeles",
            "chicago",
            "houston",
            "miami",
            "atlanta",
            "washington",
            "boston",
            "seattle",
        ],
        veto: &[],
    },
    ZoneRule {
        calling_code: "+212",
        terms: &[
            "maroc",
            "morocco",
            "casablanca",
            "rabat",
            "fès",
            "fez",
            "marrakech",
            "agadir",
            "tanger",
            "meknès",
        ],
        veto: &[],
    },
    ZoneRule {
        calling_code: "+213",
        terms: &[
            "algérie",
            "algerie",
            "algeria",
            "alger",
            "oran",
            "constantine",
            "annaba",
            "blida",
            "batna",
            "sétif",
        ],
        veto: &[],
    },
    ZoneRule {
        calling_code: "+216",
        terms: &[
            "tunisie",
            "tunisia",
            "tunis",
            "sfax",
            "sousse",
            "kairouan",
            "bizerte",
            "gabès",
            "ariana",
        ],
        veto: &[],
    },
];

/// Calling code for a zone hint, if any zone matches
pub fn lookup_calling_code(zone_text: &str) -> Option<&'static str> {
    let zone = zone_text.to_lowercase();

    GEO_ZONES
        .iter()
        .find(|rule| {
            rule.terms.iter().any(|term| zone.contains(term))
                && !rule.veto.iter().any(|term| zone.contains(term))
        })
        .map(|rule| rule.calling_code)
}

/// Calling code for a zone hint, falling back to the default
pub fn resolve_calling_code(zone_text: &str) -> &'static str {
    lookup_calling_code(zone_text).unwrap_or(DEFAULT_CALLING_CODE)
}
