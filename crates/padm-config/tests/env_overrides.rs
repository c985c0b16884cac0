use figment::Jail;
use padm_config::PadmConfig;

#[test]
fn env_overrides_nested_section() {
    Jail::expect_with(|jail| {
        jail.set_env("PKGADM_BUGZILLA__URL", "https://bz.example.test");
        let config: PadmConfig = PadmConfig::figment().extract().expect("config loads");
        assert_eq!(config.bugzilla.url, "https://bz.example.test");
        Ok(())
    });
}

#[test]
fn env_overrides_feed_cache_dir() {
    Jail::expect_with(|jail| {
        jail.set_env("PKGADM_FEED__CACHE_DIR", "/tmp/padm-cache");
        let config: PadmConfig = PadmConfig::figment().extract().expect("config loads");
        assert_eq!(
            config.feed.cache_dir(),
            std::path::PathBuf::from("/tmp/padm-cache")
        );
        Ok(())
    });
}

#[test]
fn non_http_endpoint_is_rejected_on_load() {
    Jail::expect_with(|jail| {
        jail.set_env("PKGADM_PKGDB__URL", "not-a-url");
        let err = PadmConfig::load().expect_err("load should reject the endpoint");
        assert!(matches!(
            err,
            padm_config::ConfigError::InvalidValue { ref field, .. } if field == "pkgdb.url"
        ));
        Ok(())
    });
}

#[test]
fn unset_env_leaves_defaults() {
    Jail::expect_with(|_jail| {
        let config: PadmConfig = PadmConfig::figment().extract().expect("config loads");
        assert_eq!(config.pkgdb.url, "https://admin.fedoraproject.org/pkgdb");
        assert!(config.fas.username.is_none());
        Ok(())
    });
}
