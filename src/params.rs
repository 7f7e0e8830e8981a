use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Fixná bijekcia: externé názvy parametrov -> stĺpce datasetu
///
/// Mapovanie je identita, ale klienti sa spoliehajú na to, že neznáme
/// názvy sú vyfiltrované ešte pred spustením pipeline.
static PARAM_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        "life_expectancy",
        "hdi_index",
        "co2_consump",
        "gdp",
        "services",
        "trade_percent_gdp",
        "pv_est",
        "inflation",
        "service_workers_percent",
        "hdi_full",
        "lex",
        "gdp_per_capita",
        "co2_pcap_cons",
    ]
    .iter()
    .map(|name| (*name, *name))
    .collect()
});

/// Či je názov indikátora známy
pub fn is_known(name: &str) -> bool {
    PARAM_MAP.contains_key(name)
}

/// Premapuje požadované názvy na stĺpce datasetu, v poradí vstupu;
/// neznáme názvy vyfiltruje
pub fn resolve(names: &[String]) -> Vec<String> {
    names
        .iter()
        .filter_map(|n| PARAM_MAP.get(n.as_str()).map(|column| (*column).to_string()))
        .collect()
}

/// Vráti zoznam všetkých podporovaných indikátorov
pub fn known_params() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = PARAM_MAP.keys().copied().collect();
    names.sort_unstable();
    names
}
