use std::time::Duration;

use routeguide::client::{sample_route, ClientArgs, Demo, GuideClient, OutputFormatter};
use routeguide::storage::{load_features, DatasetFormat};
use routeguide::{Coordinate, Rectangle, Result, RouteNote};

#[tokio::main]
async fn main() -> Result<()> {
    let args = ClientArgs::parse_args();

    // 验证参数
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let endpoint = args.endpoint();
    println!("{}", OutputFormatter::format_connecting_message(&endpoint));
    let mut client = match GuideClient::connect(endpoint.clone()).await {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", OutputFormatter::format_error(&format!("Failed to connect: {}", e)));
            std::process::exit(1);
        }
    };
    println!("{}", OutputFormatter::format_connected_message(&endpoint));
    println!();

    if args.should_run(Demo::Get) {
        run_get_feature(&mut client).await?;
    }
    if args.should_run(Demo::List) {
        run_list_features(&mut client).await?;
    }
    if args.should_run(Demo::Record) {
        run_record_route(&mut client, &args).await?;
    }
    if args.should_run(Demo::Chat) {
        run_route_chat(&mut client).await?;
    }

    Ok(())
}

async fn run_get_feature(client: &mut GuideClient) -> Result<()> {
    println!("{}", OutputFormatter::format_header("GetFeature"));

    // 一个已知要素，一个空位置
    for at in [
        Coordinate::new(409_146_138, -746_188_906),
        Coordinate::new(0, 0),
    ] {
        let feature = client.get_feature(at).await?;
        println!("{}", OutputFormatter::format_feature(&feature));
    }
    println!();
    Ok(())
}

async fn run_list_features(client: &mut GuideClient) -> Result<()> {
    println!("{}", OutputFormatter::format_header("ListFeatures"));
    println!("Looking for features between 40, -75 and 42, -73");

    let rect = Rectangle::new(
        Coordinate::new(400_000_000, -750_000_000),
        Coordinate::new(420_000_000, -730_000_000),
    );
    let features = client.list_features(rect).await?;
    for feature in &features {
        println!("{}", OutputFormatter::format_feature(feature));
    }
    println!("{} features listed", features.len());
    println!();
    Ok(())
}

async fn run_record_route(client: &mut GuideClient, args: &ClientArgs) -> Result<()> {
    println!("{}", OutputFormatter::format_header("RecordRoute"));

    let features = load_features(&args.db_path, DatasetFormat::Auto).await?;
    let route = sample_route(&features, args.num_points);
    println!("Traversing {} points", route.len());

    let summary = client
        .record_route(route, Duration::from_millis(args.max_delay_ms))
        .await?;
    println!("{}", OutputFormatter::format_summary(&summary));
    println!();
    Ok(())
}

async fn run_route_chat(client: &mut GuideClient) -> Result<()> {
    println!("{}", OutputFormatter::format_header("RouteChat"));

    let notes = vec![
        RouteNote::new(Coordinate::new(0, 0), "First message"),
        RouteNote::new(Coordinate::new(0, 1), "Second message"),
        RouteNote::new(Coordinate::new(1, 0), "Third message"),
        RouteNote::new(Coordinate::new(0, 0), "Fourth message"),
    ];
    for note in &notes {
        println!(
            "Sending message \"{}\" at {}, {}",
            note.message, note.location.latitude, note.location.longitude
        );
    }

    let replies = client.route_chat(notes).await?;
    for reply in &replies {
        println!("{}", OutputFormatter::format_note(reply));
    }
    println!();
    Ok(())
}
