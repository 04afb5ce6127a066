use log::error;
use zoom_meet::config::Config;
use zoom_meet::logging::Logger;
use zoom_meet::ZoomClient;

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config);

    let client = match ZoomClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build Zoom client: {e}");
            std::process::exit(1);
        }
    };

    match client
        .create_meeting(
            config.topic.clone(),
            config.start_time.clone(),
            Some(config.duration),
        )
        .await
    {
        Ok(join_url) => println!("{join_url}"),
        Err(e) => {
            error!("Failed to create meeting: {e}");
            std::process::exit(1);
        }
    }
}
