use planner_content::ContentFactory;
use planner_core::testing::LinearEngine;
use planner_core::{Attribute, StartingClass};
use planner_runtime::{OptimizeRequest, OptimizerRuntime, RuntimeConfig};

const WEAPONS: &str = r#"
(
    weapons: [
        (
            name: "Zweihander +25",
            metadata: (
                weight: 15.5,
                upgrade_level: 25,
                tier: regular,
                weapon_name: "Zweihander",
                affinity: standard,
                weapon_type: colossal_sword,
                paired: false,
            ),
            requirements: { str: 19, dex: 11 },
            attack: { physical: 320.0 },
            attribute_scaling: { strength: 0.9, dexterity: 0.6 },
            damage_scaling_attributes: { physical: [strength, dexterity] },
            damage_scaling_curves: { physical: 0 },
            sorcery_tool: false,
            incantation_tool: false,
        ),
    ],
)
"#;

const PRESETS: &str = r#"
(
    presets: [
        (name: "Physical", weights: (attack_power: { physical: 1.0 })),
    ],
)
"#;

const CONFIG: &str = "max_attribute = 60\n";

#[tokio::test]
async fn serves_content_loaded_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("weapons.ron"), WEAPONS).unwrap();
    std::fs::write(dir.path().join("presets.ron"), PRESETS).unwrap();
    std::fs::write(dir.path().join("config.toml"), CONFIG).unwrap();

    let factory = ContentFactory::new(dir.path());
    let config = factory.load_config().unwrap();
    let weapons = factory.load_weapons().unwrap();
    let presets = factory.load_presets().unwrap();

    let runtime = OptimizerRuntime::builder()
        .config(RuntimeConfig {
            optimizer: config,
            ..RuntimeConfig::default()
        })
        .catalog(weapons)
        .engine(LinearEngine::default())
        .build()
        .await
        .unwrap();
    assert_eq!(runtime.catalog().len(), 1);

    let request = OptimizeRequest::new(StartingClass::Wretch, 150, 25)
        .with_weapon("Zweihander +25")
        .with_objective_weights(presets[0].weights.clone());
    let result = runtime.handle().optimize(request).await.unwrap();

    assert_eq!(result.floor_attributes[Attribute::Strength], 19);
    assert_eq!(result.floor_attributes[Attribute::Dexterity], 11);
    assert!(result.attributes.iter().all(|(_, value)| value <= 60));
    assert_eq!(result.attributes[Attribute::Strength], 60);
    assert_eq!(result.attributes[Attribute::Dexterity], 60);

    runtime.shutdown().await.unwrap();
}
