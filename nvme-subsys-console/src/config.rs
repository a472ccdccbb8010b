//! JSON5 description of the subsystems a console hosts.

use anyhow::Context;
use nvme_subsys::{NamespaceParams, SubsystemParams};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConsoleConfig {
    pub(crate) subsystems: Vec<SubsystemConfig>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubsystemConfig {
    pub(crate) id: String,
    #[serde(flatten)]
    pub(crate) params: SubsystemParams,
    /// Controller serials, registered in this order.
    #[serde(default)]
    pub(crate) controllers: Vec<String>,
    /// Registered after every controller.
    #[serde(default)]
    pub(crate) namespaces: Vec<NamespaceParams>,
}

impl ConsoleConfig {
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("unable to read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub(crate) fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(json5::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::ConsoleConfig;
    use nvme_subsys::NamespaceParams;

    #[test]
    fn parse_fills_defaults() {
        let config = ConsoleConfig::parse(
            r#"{
                // comments and trailing commas are fine
                subsystems: [
                    { id: "sub0", ana: true, controllers: ["c0"], namespaces: [{ nsid: 5, anagrpid: 3 }] },
                    { id: "sub1", namespaces: [{ nsid: 2 }], },
                ],
            }"#,
        )
        .expect("valid config");

        let sub0 = &config.subsystems[0];
        assert_eq!(sub0.id, "sub0");
        assert!(sub0.params.ana);
        assert_eq!(sub0.controllers, vec!["c0".to_string()]);
        assert_eq!(
            sub0.namespaces,
            vec![NamespaceParams {
                nsid: 5,
                anagrpid: 3
            }]
        );

        let sub1 = &config.subsystems[1];
        assert!(!sub1.params.ana);
        assert!(sub1.controllers.is_empty());
        assert_eq!(sub1.namespaces[0].anagrpid, 0);
    }

    #[test]
    fn parse_rejects_unknown_top_level_keys() {
        assert!(ConsoleConfig::parse(r#"{ subsystems: [], extra: 1 }"#).is_err());
    }

    #[test]
    fn bundled_example_config_parses() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("configs")
            .join("two-controllers.json5");
        let config = ConsoleConfig::load(&path).expect("bundled config loads");
        assert_eq!(config.subsystems.len(), 2);
    }
}
