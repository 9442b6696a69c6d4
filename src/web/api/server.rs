use crate::campaign::sender::LoggingCampaignSender;
use crate::recipient::upload::{DEFAULT_MAX_UPLOAD_SIZE, UploadConfig};
use crate::sender_profile::store::ProfileStore;
use crate::session::Session;
use crate::tools::env_args::retrieve_parsed_arg_value;
use crate::web::api::{
    campaign_controller, dashboard_controller, profiles_controller, recipients_controller,
};
use crate::web::server::Server;
use log::info;
use rocket::{Build, Rocket};
use std::sync::Mutex;

const MAX_UPLOAD_SIZE_ENV_ARG: &str = "--max-upload-size";

pub struct ApiServer {}

impl ApiServer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Server for ApiServer {
    fn initialize_managed_states(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        let upload_config = build_upload_config();
        info!(
            "Recipients files are limited to {} bytes",
            upload_config.max_size()
        );
        let session = Session::new(
            upload_config,
            ProfileStore::default(),
            Box::new(LoggingCampaignSender),
        );

        rocket_build.manage(Mutex::new(session))
    }

    fn mount_routes(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build.mount(
            "/api/",
            routes![
                recipients_controller::import_recipients,
                recipients_controller::list_recipients,
                recipients_controller::add_recipient,
                recipients_controller::remove_recipient,
                recipients_controller::list_duplicates,
                recipients_controller::merge_recipients,
                recipients_controller::merge_all_duplicates,
                dashboard_controller::get_dashboard,
                profiles_controller::list_profiles,
                profiles_controller::create_profile,
                profiles_controller::update_profile,
                profiles_controller::delete_profile,
                profiles_controller::set_default_profile,
                campaign_controller::get_draft,
                campaign_controller::select_profile,
                campaign_controller::set_subject,
                campaign_controller::set_message,
                campaign_controller::set_countries,
                campaign_controller::list_targets,
                campaign_controller::preview,
                campaign_controller::send_campaign,
            ],
        )
    }
}

fn build_upload_config() -> UploadConfig {
    UploadConfig::new(retrieve_parsed_arg_value(
        MAX_UPLOAD_SIZE_ENV_ARG,
        DEFAULT_MAX_UPLOAD_SIZE,
    ))
}

#[cfg(test)]
mod tests {
    use crate::recipient::upload::DEFAULT_MAX_UPLOAD_SIZE;
    use crate::tools::env_args::with_env_args;
    use crate::web::api::server::{ApiServer, MAX_UPLOAD_SIZE_ENV_ARG, build_upload_config};
    use crate::web::server::Server;
    use rocket::http::Status;
    use rocket::local::asynchronous::Client;

    #[test]
    fn should_build_custom_upload_config() {
        let config = with_env_args(
            vec![format!("{MAX_UPLOAD_SIZE_ENV_ARG}=1024")],
            build_upload_config,
        );

        assert_eq!(&1024, config.max_size());
    }

    #[test]
    fn should_build_default_upload_config() {
        let config = with_env_args(vec![], build_upload_config);

        assert_eq!(&DEFAULT_MAX_UPLOAD_SIZE, config.max_size());
    }

    #[async_test]
    async fn should_serve_api_routes() {
        let server = ApiServer::new();
        let rocket = server.mount_routes(server.initialize_managed_states(rocket::build()));
        let client = Client::tracked(rocket).await.unwrap();

        let response = client.get("/api/dashboard").dispatch().await;
        assert_eq!(Status::Ok, response.status());

        let response = client.get("/api/profiles").dispatch().await;
        assert_eq!(Status::Ok, response.status());
        assert_eq!(Some("[]".to_owned()), response.into_string().await);
    }
}
