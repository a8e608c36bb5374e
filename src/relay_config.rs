use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::ErrorKind;

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct DefaultCredentials {
    pub account_id: String,
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct EgressProxyConfig {
    pub url: String,
    pub user: Option<String>,
    pub pass: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct RelayConfigFile {
    pub token_endpoint: String,
    pub defaults: DefaultCredentials,
    #[serde(default = "default_error_log")]
    pub error_log: String,
    #[serde(default = "default_accept_invalid_certs")]
    pub accept_invalid_certs: bool,
    pub egress_proxy: Option<EgressProxyConfig>,
}

fn default_error_log() -> String {
    String::from("log.txt")
}

fn default_accept_invalid_certs() -> bool {
    true
}

impl RelayConfigFile {
    pub fn load_from_file(file: &File) -> Result<RelayConfigFile, std::io::Error> {
        let relay_config: RelayConfigFile =
            serde_yaml::from_reader(file).map_err(|err| std::io::Error::new(ErrorKind::Other, err))?;

        Ok(relay_config)
    }
}
