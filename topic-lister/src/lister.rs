use std::io::Write;

use futures::StreamExt;
use tokio_util::sync::CancellationToken;

use crate::backend::{Backend, Session};
use crate::config::ListerConfig;
use crate::error::{ConfigError, ListerError};
use crate::output::write_topic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassSummary {
    /// Number of topic lines written.
    pub topics: usize,
}

pub struct Lister<B> {
    backend: B,
    config: ListerConfig,
}

impl<B: Backend> Lister<B> {
    pub fn new(backend: B, config: ListerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self { backend, config })
    }

    /// Opens a session, writes every topic of the project to `out` in the
    /// order the backend returns them and drops the session.
    ///
    /// Lines written before an enumeration failure stay written.
    pub async fn run_pass<W: Write>(&self, out: &mut W) -> Result<PassSummary, ListerError> {
        let project = self.config.project_id();

        let session = self
            .backend
            .connect(project)
            .await
            .map_err(|source| ListerError::Connect {
                project: String::from(project),
                source,
            })?;
        debug!("opened session for project {}", project);

        let mut topics = session.topics();
        let mut listed = 0;
        let result = loop {
            match topics.next().await {
                None => break Ok(PassSummary { topics: listed }),
                Some(Ok(topic)) => {
                    if let Err(e) = write_topic(out, self.config.format(), project, &topic) {
                        break Err(ListerError::Output(e));
                    }
                    listed += 1;
                }
                Some(Err(source)) => {
                    break Err(ListerError::Enumerate {
                        project: String::from(project),
                        listed,
                        source,
                    })
                }
            }
        };

        let flushed = out.flush();
        let summary = result?;
        flushed?;

        Ok(summary)
    }

    /// Runs passes separated by the configured interval until `cancel` fires
    /// or a pass fails.
    ///
    /// Cancellation is honoured both while a pass is in flight and while
    /// waiting for the next one; either way the call returns `Ok(())`.
    pub async fn run<W: Write>(
        &self,
        out: &mut W,
        cancel: &CancellationToken,
    ) -> Result<(), ListerError> {
        let project = self.config.project_id();
        let interval = self.config.interval();

        loop {
            let summary = tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                summary = self.run_pass(out) => summary?,
            };
            info!("listed {} topics in project {}", summary.topics, project);

            trace!("next pass in {:?}", interval);
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(interval) => {}
            }
        }

        info!("topic listing for project {} cancelled", project);
        Ok(())
    }
}
