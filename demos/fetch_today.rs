use garmin_wellness::Client;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let token = env::var("GARMIN_SESSION_TOKEN")
        .map_err(|_| "Set GARMIN_SESSION_TOKEN in your environment or .env file")?;

    let client = Client::new(token)?;
    let today = chrono::Utc::now().date_naive();

    let hrv = client.get_hrv_data(today).await?;
    let sleep = client.get_sleep_data(today).await?;
    let spo2 = client.get_spo2_data(today).await?;
    let resp = client.get_respiration_data(today).await?;
    let stress = client.get_all_day_stress(today).await?;

    println!("Wellness documents for {}:", today);
    for (name, payload) in [
        ("hrv", hrv),
        ("sleep", sleep),
        ("spo2", spo2),
        ("resp", resp),
        ("stress", stress),
    ] {
        if payload.is_empty() {
            println!("{name}: <no data>");
        } else {
            println!("{name}: {payload}");
        }
    }

    Ok(())
}
