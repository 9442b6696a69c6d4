use crate::campaign::error::SendError;
use chrono::Utc;
use dto::campaign::{CampaignPayload, SendReport};
use log::{debug, info};

/// Boundary towards whatever actually delivers campaigns.
pub trait CampaignSender {
    fn send(&self, payload: CampaignPayload) -> Result<SendReport, SendError>;
}

/// Accepts every campaign and only logs it: no email leaves the app.
#[derive(Debug, Default)]
pub struct LoggingCampaignSender;

impl CampaignSender for LoggingCampaignSender {
    fn send(&self, payload: CampaignPayload) -> Result<SendReport, SendError> {
        let recipients_count = payload.recipients().len();
        info!(
            "Campaign `{}` handed off for {recipients_count} recipient(s)",
            payload.subject()
        );
        debug!("{payload:#?}");

        Ok(SendReport::new(recipients_count, Utc::now()))
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use dto::recipient::tests::{alice, bob};
    use std::sync::{Arc, Mutex};

    /// Keeps every payload it receives, so that tests can look at them.
    #[derive(Debug, Default, Clone)]
    pub struct RecordingSender {
        payloads: Arc<Mutex<Vec<CampaignPayload>>>,
    }

    impl RecordingSender {
        pub fn payloads(&self) -> Vec<CampaignPayload> {
            self.payloads.lock().unwrap().clone()
        }
    }

    impl CampaignSender for RecordingSender {
        fn send(&self, payload: CampaignPayload) -> Result<SendReport, SendError> {
            let recipients_count = payload.recipients().len();
            self.payloads.lock().unwrap().push(payload);
            Ok(SendReport::new(recipients_count, Utc::now()))
        }
    }

    pub struct RefusingSender;

    impl CampaignSender for RefusingSender {
        fn send(&self, _payload: CampaignPayload) -> Result<SendReport, SendError> {
            Err(SendError::Refused("quota exceeded".to_owned()))
        }
    }

    #[test]
    fn should_acknowledge_campaign() {
        let payload = CampaignPayload::new(
            "Hello".to_owned(),
            "Hello everyone!".to_owned(),
            None,
            vec![alice(), bob()],
        );

        let report = LoggingCampaignSender.send(payload).unwrap();
        assert_eq!(2, *report.recipients_count());
    }
}
