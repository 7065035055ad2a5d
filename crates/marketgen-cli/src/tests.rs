use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["marketgen"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_adapt_with_several_platforms() {
    let cli = Cli::try_parse_from([
        "marketgen",
        "adapt",
        "--input",
        "item.json",
        "--platform",
        "instagram",
        "--platform",
        "YouTube",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Adapt { ref platforms, concurrent: false, .. })
            if platforms == &[Platform::Instagram, Platform::YouTube]
    ));
}

#[test]
fn adapt_keeps_unknown_platform_names() {
    let cli = Cli::try_parse_from([
        "marketgen", "adapt", "--input", "item.json", "--platform", "Mastodon", "--concurrent",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Adapt { ref platforms, concurrent: true, .. })
            if platforms == &[Platform::Other("mastodon".to_string())]
    ));
}

#[test]
fn adapt_requires_a_platform() {
    assert!(Cli::try_parse_from(["marketgen", "adapt", "--input", "item.json"]).is_err());
}

#[test]
fn parses_score_with_text_and_model_score() {
    let cli = Cli::try_parse_from([
        "marketgen",
        "score",
        "--brand",
        "leaf",
        "--text",
        "Eco first.",
        "--model-score",
        "0.7",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Score {
            ref brand,
            source: ScoreSource { text: Some(ref t), input: None },
            model_score: Some(m),
        }) if brand == "leaf" && t == "Eco first." && (m - 0.7).abs() < f64::EPSILON
    ));
}

#[test]
fn score_needs_exactly_one_source() {
    assert!(Cli::try_parse_from(["marketgen", "score", "--brand", "leaf"]).is_err());
    assert!(Cli::try_parse_from([
        "marketgen", "score", "--brand", "leaf", "--text", "a", "--input", "b.json",
    ])
    .is_err());
}

#[test]
fn parses_brands_subcommands() {
    let cli = Cli::try_parse_from(["marketgen", "brands", "validate"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Brands {
            command: BrandsCommands::Validate
        })
    ));

    let cli = Cli::try_parse_from(["marketgen", "brands", "import"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Brands {
            command: BrandsCommands::Import
        })
    ));
}

#[test]
fn parses_profile_with_several_inputs() {
    let cli = Cli::try_parse_from([
        "marketgen", "profile", "--input", "a.json", "--input", "b.json", "--top", "5",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Profile { ref inputs, top: 5 }) if inputs.len() == 2
    ));

    let cli = Cli::try_parse_from(["marketgen", "profile", "--input", "a.json"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Profile { top, .. }) if top == marketgen_voice::DEFAULT_KEY_PHRASES
    ));
    assert!(Cli::try_parse_from(["marketgen", "profile"]).is_err());
}

mod handlers {
    use std::path::Path;

    use marketgen_core::{
        AppConfig, BrandModel, BrandStore, ContentItem, FileBrandStore, TextContent,
    };

    use crate::adapt::read_item;
    use crate::brands::{run_brands, BrandsCommands};
    use crate::score::{find_brand, run_profile};

    const BRANDS_YAML: &str = r#"
brands:
  - name: Leaf Co
    keywords: [eco, green]
    style_attributes:
      - name: formal
        target_value: 0.6
"#;

    fn config_in(dir: &Path) -> AppConfig {
        let mut config = marketgen_core::load_app_config_from_env().expect("default config");
        config.brands_path = dir.join("brands.yaml");
        config.data_dir = dir.join("data");
        config
    }

    #[test]
    fn import_then_find_from_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = config_in(dir.path());
        std::fs::write(&config.brands_path, BRANDS_YAML).expect("write brands");

        run_brands(&config, &BrandsCommands::Import).expect("import");
        let stored = FileBrandStore::new(config.brand_store_dir())
            .load("leaf-co")
            .expect("load");
        assert!(stored.is_some());

        std::fs::remove_file(&config.brands_path).expect("remove brands file");
        let found = find_brand(&config, "Leaf Co").expect("lookup");
        assert_eq!(found.map(|b| b.keywords), Some(vec!["eco".to_string(), "green".to_string()]));
    }

    #[test]
    fn brand_file_wins_over_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = config_in(dir.path());
        std::fs::write(&config.brands_path, BRANDS_YAML).expect("write brands");
        FileBrandStore::new(config.brand_store_dir())
            .save(&BrandModel::new("Leaf Co"))
            .expect("save");

        let found = find_brand(&config, "leaf-co").expect("lookup").expect("brand");
        assert_eq!(found.keywords.len(), 2);
    }

    #[test]
    fn unreadable_item_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("item.json");
        std::fs::write(&path, "{not json").expect("write item");
        assert!(read_item(&path).is_err());
        assert!(read_item(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn profile_reads_every_item_and_fails_on_a_bad_one() {
        let dir = tempfile::tempdir().expect("tempdir");
        let good = dir.path().join("good.json");
        let item = ContentItem::text(
            "leaf",
            TextContent {
                text: "Fresh roasted coffee. Fresh roasted beans.".to_string(),
                ..TextContent::default()
            },
        );
        let json = serde_json::to_string(&item).expect("serialize");
        std::fs::write(&good, json).expect("write item");
        assert!(run_profile(&[good.clone()], 3).is_ok());

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{not json").expect("write item");
        assert!(run_profile(&[good, bad], 3).is_err());
    }
}
