//! Configuration-driven assembly

use groundwork_common::{AppConfig, Environment, TracingConfig};
use groundwork_service::{CreateItemRequest, ItemService};
use integration_tests::helpers::test_app_from_config;

#[tokio::test]
async fn default_config_assembles_a_working_app() {
    let config = AppConfig::from_env().expect("default environment must load");

    assert_eq!(config.app.name, "groundwork");
    assert_eq!(config.app.env, Environment::Development);
    assert!(!config.telemetry.json);

    let app = test_app_from_config(&config);
    let service = ItemService::new(&app.ctx);
    let item = service
        .create_item(CreateItemRequest {
            name: "Configured".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(item.name(), "Configured");
}

#[tokio::test]
async fn telemetry_settings_feed_tracing_config() {
    let config = AppConfig::from_env().expect("default environment must load");
    let tracing_config = TracingConfig::from_settings(&config.telemetry);
    assert_eq!(tracing_config.level, tracing::Level::INFO);
}

#[tokio::test]
async fn fixed_node_config_pins_generated_ids() {
    let mut config = AppConfig::from_env().expect("default environment must load");
    config.id.node = Some(42);

    let app = test_app_from_config(&config);
    assert_eq!(app.ctx.generate_id().node(), 42);
}
