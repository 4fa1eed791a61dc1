//! Server configuration display formatting

use crate::config::ServerConfig;

/// Format resolved server settings
pub fn format_server_config(config: &ServerConfig) -> String {
    let mut output = String::new();

    output.push_str("Server Configuration\n");
    output.push_str("====================\n");
    output.push_str(&format!("Address:        {}\n", config.socket_addr()));
    output.push_str(&format!("Home page:      {}\n", config.home_path().display()));
    output.push_str(&format!("Auth home page: {}\n", config.home_auth_path().display()));

    let public = if config.server_public_files.is_empty() {
        "(none)".to_string()
    } else {
        config.server_public_files.join(", ")
    };
    output.push_str(&format!("Public files:   {}\n", public));
    output.push_str(&format!("Budget config:  {}\n", config.sb_config_fpath));

    output.push('\n');
    output.push_str("Keys:\n");
    output.push_str(&format!("  Auth key:     {}\n", config.auth_key_path().display()));
    output.push_str(&format!("  JWT key:      {}\n", config.auth_jwt_key_path().display()));
    output.push_str(&format!(
        "  Special user: {}\n",
        config.auth_special_user_path().display()
    ));

    output.push('\n');
    match (config.cert_path(), config.cert_key_path()) {
        (Some(cert), Some(key)) => {
            output.push_str("Certificates: enabled\n");
            output.push_str(&format!("  Certificate:  {}\n", cert.display()));
            output.push_str(&format!("  Private key:  {}\n", key.display()));
        }
        _ => output.push_str("Certificates: disabled\n"),
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(certs_enabled: bool) -> ServerConfig {
        ServerConfig {
            server_addr: "127.0.0.1".into(),
            server_port: 8080,
            server_root_dpath: "/srv/root".into(),
            server_home_fname: "index.html".into(),
            server_home_auth_fname: "home.html".into(),
            server_public_files: vec![],
            sb_config_fpath: "/srv/budget.json".into(),
            key_dpath: "/srv/keys".into(),
            auth_key_fname: "auth.key".into(),
            auth_jwt_key_fname: "jwt.key".into(),
            auth_special_user_fname: "special".into(),
            certs_enabled,
            certs_dpath: "/srv/certs".into(),
            certs_cert_fname: "cert.pem".into(),
            certs_key_fname: "key.pem".into(),
        }
    }

    #[test]
    fn test_format_without_certs() {
        let output = format_server_config(&config(false));
        assert!(output.contains("Address:        127.0.0.1:8080"));
        assert!(output.contains("Public files:   (none)"));
        assert!(output.contains("Certificates: disabled"));
        assert!(!output.contains("cert.pem"));
    }

    #[test]
    fn test_format_with_certs() {
        let output = format_server_config(&config(true));
        assert!(output.contains("Certificates: enabled"));
        assert!(output.contains("/srv/certs/cert.pem"));
        assert!(output.contains("/srv/certs/key.pem"));
    }
}
