use log::info;

use tello_flight::{fly, Pilot, Result, TelloDrone};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    info!("starting");

    let drone = TelloDrone::connect().await?;
    let mut pilot = Pilot::new(drone);

    let report = fly(&mut pilot).await?;

    println!("Battery percentage: {}", report.battery_before);
    println!("Battery percentage: {}", report.battery_after);
    println!("Battery used for flight {}", report.battery_used());

    Ok(())
}
