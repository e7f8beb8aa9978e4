//! Platform to regional host routing for match-v5.

/// Regional routing value for a platform identifier.
///
/// Summoner/league/mastery endpoints are served per platform (`euw1`),
/// match-v5 per continental region (`europe`). Unknown platforms route to
/// `americas`, which is what Riot documents as the widest region.
pub fn region_for(platform: &str) -> &'static str {
    match platform {
        "euw1" | "eun1" | "tr1" | "ru" => "europe",
        "kr" | "jp1" => "asia",
        "oc1" | "ph2" | "sg2" | "th2" | "tw2" | "vn2" => "sea",
        _ => "americas",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_known_platforms() {
        assert_eq!(region_for("euw1"), "europe");
        assert_eq!(region_for("kr"), "asia");
        assert_eq!(region_for("na1"), "americas");
        assert_eq!(region_for("oc1"), "sea");
    }

    #[test]
    fn unknown_platform_defaults_to_americas() {
        assert_eq!(region_for("pbe1"), "americas");
    }
}
