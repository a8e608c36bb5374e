use reqwest::redirect::Policy;
use reqwest::Client;

pub struct EgressProxy {
    pub url: String,
    pub user: Option<String>,
    pub pass: Option<String>,
}

pub struct HttpClientConfig {
    pub accept_invalid_certs: bool,
    pub egress_proxy: Option<EgressProxy>,
}

impl HttpClientConfig {
    pub fn to_client(self) -> Result<Client, reqwest::Error> {
        let mut client_builder = reqwest::ClientBuilder::new();

        if let Some(EgressProxy { url, user, pass }) = self.egress_proxy {
            let mut proxy = reqwest::Proxy::all(url)?;

            if let (Some(user_name), Some(password)) = (user, pass) {
                proxy = proxy.basic_auth(&user_name, &password);
            }

            client_builder = client_builder.proxy(proxy);
        }

        if self.accept_invalid_certs {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.redirect(Policy::limited(5)).build()?;

        Ok(client)
    }
}
