use anyhow::Context;
use tp_client::TutorClient;
use tp_config::TutorConfig;

use crate::cli::global::GlobalFlags;

/// Resources shared by every backend command.
pub struct AppContext {
    pub client: TutorClient,
    pub config: TutorConfig,
}

impl AppContext {
    /// Load configuration (with `.env`), apply `--api-url`, and build the
    /// backend client.
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let mut config = TutorConfig::load_with_dotenv().context("failed to load configuration")?;
        if let Some(url) = flags.api_url.as_deref() {
            config
                .api
                .set_base_url(url)
                .context("invalid --api-url")?;
        }
        let client = TutorClient::new(&config.api).context("failed to build backend client")?;
        tracing::debug!(base_url = client.base_url(), "backend client ready");
        Ok(Self { client, config })
    }

    /// The given student, else `defaults.student_id`.
    pub fn student(&self, explicit: Option<&str>) -> anyhow::Result<String> {
        self.config.defaults.student(explicit).ok_or_else(|| {
            anyhow::anyhow!("a student is required: pass --student or set defaults.student_id")
        })
    }

    /// The given tutor, else `defaults.tutor_id`.
    pub fn tutor(&self, explicit: Option<&str>) -> anyhow::Result<String> {
        self.config.defaults.tutor(explicit).ok_or_else(|| {
            anyhow::anyhow!("a tutor is required: pass --tutor or set defaults.tutor_id")
        })
    }
}
