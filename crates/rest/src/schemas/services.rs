//! External service credentials and per-module queried addresses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::args::json_schema;

/// Third party services that take an API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExternalService {
    Etherscan,
    Cryptocompare,
    Beaconchain,
    Loopring,
}

/// One service and the API key to use for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalServiceCredentials {
    pub name: ExternalService,
    pub api_key: String,
}

/// `PUT /external_services`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalServicesAdd {
    pub services: Vec<ExternalServiceCredentials>,
}

json_schema!(ExternalServicesAdd);

/// `DELETE /external_services`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalServicesDelete {
    pub services: Vec<ExternalService>,
}

json_schema!(ExternalServicesDelete);

/// Ethereum modules whose queries can be limited to chosen addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EthereumModule {
    MakerdaoDsr,
    MakerdaoVaults,
    Aave,
    Compound,
    YearnVaults,
    Uniswap,
    Adex,
    Loopring,
    Balancer,
    Eth2,
}

impl EthereumModule {
    /// Returns the module name used in requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            EthereumModule::MakerdaoDsr => "makerdao_dsr",
            EthereumModule::MakerdaoVaults => "makerdao_vaults",
            EthereumModule::Aave => "aave",
            EthereumModule::Compound => "compound",
            EthereumModule::YearnVaults => "yearn_vaults",
            EthereumModule::Uniswap => "uniswap",
            EthereumModule::Adex => "adex",
            EthereumModule::Loopring => "loopring",
            EthereumModule::Balancer => "balancer",
            EthereumModule::Eth2 => "eth2",
        }
    }
}

impl fmt::Display for EthereumModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `PUT` and `DELETE /queried_addresses`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueriedAddress {
    pub module: EthereumModule,
    pub address: String,
}

json_schema!(QueriedAddress);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{MergedArguments, Schema};
    use serde_json::json;

    #[test]
    fn test_module_names_match_wire_names() {
        for module in [
            EthereumModule::MakerdaoDsr,
            EthereumModule::YearnVaults,
            EthereumModule::Eth2,
        ] {
            assert_eq!(json!(module), json!(module.as_str()));
        }
    }

    #[test]
    fn test_queried_address_rejects_unknown_module() {
        let mut args = MergedArguments::new();
        args.insert("module", "foo");
        args.insert("address", "0x9531C059098e3d194fF87FebB587aB07B30B1306");
        let err = QueriedAddress::from_arguments(args).unwrap_err();
        assert!(err.to_string().contains("unknown variant `foo`"));
    }

    #[test]
    fn test_external_services() {
        let mut args = MergedArguments::new();
        args.insert(
            "services",
            json!([{"name": "etherscan", "api_key": "key"}]),
        );
        let parsed = ExternalServicesAdd::from_arguments(args).unwrap();
        assert_eq!(parsed.services[0].name, ExternalService::Etherscan);

        let mut args = MergedArguments::new();
        args.insert("services", json!(["twitter"]));
        assert!(ExternalServicesDelete::from_arguments(args).is_err());
    }
}
