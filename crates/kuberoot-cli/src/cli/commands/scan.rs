//! `kuberoot scan` - audit the cluster for containers running as root.

use std::time::Duration;

use anyhow::{Context as _, Result};
use kuberoot_audit::{AuditOptions, Auditor, IdentityProbe};
use kuberoot_client::{ClientConfig, KubeClient, KubeClientBuilder};
use tracing::info;

use super::Context;
use crate::cli::args::ScanArgs;
use crate::output;

/// Fully resolved scan settings: flags over config file over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    pub client: ClientConfig,
    pub exec_timeout: Option<Duration>,
    pub concurrency: usize,
    pub classifier: crate::config::Classifier,
}

impl ScanSettings {
    pub fn resolve(ctx: &Context, args: ScanArgs) -> Self {
        let mut client = ClientConfig::new();
        if let Some(path) = args.kubeconfig.or_else(|| ctx.config.kubeconfig.clone()) {
            client = client.kubeconfig(shellexpand::tilde(&path).into_owned());
        }
        if let Some(context) = args.context.or_else(|| ctx.config.context.clone()) {
            client = client.context(context);
        }

        let timeout_secs = args.exec_timeout.unwrap_or(ctx.config.exec_timeout_secs);

        Self {
            client,
            exec_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
            concurrency: args.concurrency.unwrap_or(ctx.config.concurrency).max(1),
            classifier: args.classifier.unwrap_or(ctx.config.classifier),
        }
    }
}

pub async fn execute(ctx: Context, args: ScanArgs) -> Result<()> {
    let settings = ScanSettings::resolve(&ctx, args);

    let client: KubeClient = KubeClientBuilder::with_config(settings.client.clone())
        .build()
        .await
        .context("could not set up cluster access")?;
    info!(cluster = client.cluster_url(), "starting audit");

    let probe = settings
        .classifier
        .apply(IdentityProbe::new().timeout(settings.exec_timeout));
    let auditor = Auditor::new(client)
        .with_probe(probe)
        .with_options(AuditOptions {
            concurrency: settings.concurrency,
        });

    let report = auditor.run().await.context("audit aborted")?;

    print!("{}", output::render_report(&report));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Classifier, Config};
    use std::path::PathBuf;

    fn ctx(config: Config) -> Context {
        Context {
            config,
            config_path: None,
            no_color: true,
        }
    }

    #[test]
    fn test_defaults() {
        let settings = ScanSettings::resolve(&ctx(Config::default()), ScanArgs::default());
        assert_eq!(settings.client, ClientConfig::new());
        assert_eq!(settings.exec_timeout, Some(Duration::from_secs(30)));
        assert_eq!(settings.concurrency, 1);
        assert_eq!(settings.classifier, Classifier::Marker);
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            kubeconfig: Some("/etc/kube/admin.conf".to_string()),
            context: Some("prod".to_string()),
            concurrency: 4,
            ..Config::default()
        };
        let args = ScanArgs {
            context: Some("staging".to_string()),
            exec_timeout: Some(0),
            concurrency: Some(0),
            classifier: Some(Classifier::NumericUid),
            ..ScanArgs::default()
        };

        let settings = ScanSettings::resolve(&ctx(config), args);
        assert_eq!(
            settings.client.kubeconfig,
            Some(PathBuf::from("/etc/kube/admin.conf"))
        );
        assert_eq!(settings.client.context.as_deref(), Some("staging"));
        assert_eq!(settings.exec_timeout, None);
        assert_eq!(settings.concurrency, 1);
        assert_eq!(settings.classifier, Classifier::NumericUid);
    }

    #[test]
    fn test_tilde_is_expanded() {
        let args = ScanArgs {
            kubeconfig: Some("~/.kube/lab".to_string()),
            ..ScanArgs::default()
        };
        let settings = ScanSettings::resolve(&ctx(Config::default()), args);
        let path = settings.client.kubeconfig.unwrap();
        assert!(!path.starts_with("~"));
        assert!(path.ends_with(".kube/lab"));
    }
}
