use crate::cli::Cli;
use aws_config::profile::ProfileFileCredentialsProvider;
use aws_types::{region::Region, Credentials, SdkConfig};

/// Where the run takes its AWS credentials from. Resolved once at startup
/// from the command line and passed down explicitly; nothing reads
/// process-wide state after that.
#[derive(Clone, Debug, PartialEq)]
pub enum CredentialSource {
    /// Explicit access key pair from the command line
    Static {
        /// Access key id
        key_id: String,
        /// Secret access key
        secret: String,
    },
    /// A named profile from the shared AWS config files
    Profile(String),
    /// The default environment/config provider chain
    Ambient,
}

impl CredentialSource {
    /// Pick the credential source the command line asks for. clap guarantees
    /// the key pair arrives complete and never together with a profile.
    pub fn from_cli(cli: &Cli) -> CredentialSource {
        match (&cli.token_key_id, &cli.token_secret, &cli.profile) {
            (Some(key_id), Some(secret), _) => CredentialSource::Static {
                key_id: key_id.clone(),
                secret: secret.clone(),
            },
            (_, _, Some(profile)) => CredentialSource::Profile(profile.clone()),
            _ => CredentialSource::Ambient,
        }
    }

    /// Build an SDK configuration for one region with these credentials.
    #[tracing::instrument(skip(self))]
    pub async fn sdk_config(&self, region: &str) -> SdkConfig {
        let loader = aws_config::from_env().region(Region::new(region.to_owned()));

        match self {
            CredentialSource::Static { key_id, secret } => {
                loader
                    .credentials_provider(Credentials::from_keys(key_id, secret, None))
                    .load()
                    .await
            }
            CredentialSource::Profile(name) => {
                loader
                    .credentials_provider(
                        ProfileFileCredentialsProvider::builder()
                            .profile_name(name)
                            .build(),
                    )
                    .load()
                    .await
            }
            CredentialSource::Ambient => loader.load().await,
        }
    }
}
