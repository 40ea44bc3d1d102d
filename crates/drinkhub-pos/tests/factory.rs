//! Adapter factory registry behavior.

use async_trait::async_trait;
use drinkhub_core::{
    PosClientSettings, PosConfig, PosCredentials, PosLocationInfo, PosOrder, PosOrderResult,
    PosOrderStatus, PosProduct,
};
use drinkhub_pos::{AdapterFactory, PosAdapter, PosError};

struct FakeAdapter {
    name: &'static str,
}

#[async_trait]
impl PosAdapter for FakeAdapter {
    fn provider(&self) -> &str {
        self.name
    }

    async fn test_connection(&self) -> Result<bool, PosError> {
        Ok(true)
    }

    async fn fetch_menu(&self) -> Result<Vec<PosProduct>, PosError> {
        Ok(Vec::new())
    }

    async fn submit_order(&self, _order: &PosOrder) -> Result<PosOrderResult, PosError> {
        Ok(PosOrderResult::ok("fake-order"))
    }

    async fn get_location(&self, location_id: &str) -> Result<PosLocationInfo, PosError> {
        Err(PosError::NotFound {
            resource: "location",
            id: location_id.to_owned(),
        })
    }

    async fn validate_credentials(&self) -> Result<bool, PosError> {
        Ok(true)
    }

    async fn get_order_status(&self, order_id: &str) -> Result<PosOrderStatus, PosError> {
        Err(PosError::NotFound {
            resource: "order",
            id: order_id.to_owned(),
        })
    }
}

fn fake_ctor(name: &'static str) -> drinkhub_pos::AdapterCtor {
    Box::new(move |_credentials, _config| Ok(Box::new(FakeAdapter { name })))
}

#[test]
fn default_factory_registers_builtin_vendors() {
    let factory = AdapterFactory::with_default_adapters(PosClientSettings::default());
    assert_eq!(factory.supported_providers(), ["clover", "square", "toast"]);
    assert!(factory.is_provider_supported("square"));
    assert!(factory.is_provider_supported("TOAST"));
    assert!(!factory.is_provider_supported("lightspeed"));
}

#[test]
fn create_adapter_is_case_insensitive() {
    let factory = AdapterFactory::with_default_adapters(PosClientSettings::default());

    let upper = factory
        .create_adapter("SQUARE", PosCredentials::default(), PosConfig::default())
        .expect("upper-case lookup should succeed");
    let lower = factory
        .create_adapter("square", PosCredentials::default(), PosConfig::default())
        .expect("lower-case lookup should succeed");

    assert_eq!(upper.provider(), "square");
    assert_eq!(lower.provider(), "square");
}

#[test]
fn unsupported_provider_names_the_attempt_and_the_supported_list() {
    let factory = AdapterFactory::with_default_adapters(PosClientSettings::default());

    let Err(err) =
        factory.create_adapter("lightspeed", PosCredentials::default(), PosConfig::default())
    else {
        panic!("unknown provider should fail");
    };

    let message = err.to_string();
    assert!(message.contains("Unsupported POS provider"), "{message}");
    assert!(message.contains("lightspeed"), "{message}");
    assert!(message.contains("square"), "{message}");
    assert!(message.contains("toast"), "{message}");
    assert!(message.contains("clover"), "{message}");
}

#[test]
fn register_override_unregister_round_trip() {
    let factory = AdapterFactory::new();
    assert!(!factory.is_provider_supported("fake"));

    factory.register_adapter("fake", fake_ctor("fake-v1"));
    assert!(factory.is_provider_supported("fake"));
    let adapter = factory
        .create_adapter("fake", PosCredentials::default(), PosConfig::default())
        .expect("registered provider should resolve");
    assert_eq!(adapter.provider(), "fake-v1");

    // Later registration under the same name wins.
    factory.register_adapter("FAKE", fake_ctor("fake-v2"));
    let adapter = factory
        .create_adapter("fake", PosCredentials::default(), PosConfig::default())
        .expect("overridden provider should resolve");
    assert_eq!(adapter.provider(), "fake-v2");

    factory.unregister_adapter("fake");
    assert!(!factory.is_provider_supported("fake"));
    assert!(factory
        .create_adapter("fake", PosCredentials::default(), PosConfig::default())
        .is_err());

    // Unregistering a never-registered name is a no-op.
    factory.unregister_adapter("never-registered");
}
