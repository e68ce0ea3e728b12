use limitless_client::{
    LifelogQuery, LifelogsClient, config::Config, http_client::ReqwestLifelogsClient,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cfg = Config::from_env()?;
    let client = ReqwestLifelogsClient::new(&cfg.base_url, cfg.api_key);

    let limit = std::env::var("LIMITLESS_LIMIT")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(5);

    let query = LifelogQuery {
        limit: Some(limit),
        ..LifelogQuery::default()
    };
    let lifelogs = client
        .get_lifelogs(&query)
        .await
        .map_err(|e| format!("failed to fetch lifelogs: {}", e))?;

    if lifelogs.is_empty() {
        println!("No lifelogs returned (check date range or credentials)");
        return Ok(());
    }

    println!("Recent lifelogs (limit {}):", limit);
    for log in lifelogs {
        let id = log.get("id").and_then(|v| v.as_str()).unwrap_or("(no id)");
        let title = log
            .get("title")
            .and_then(|v| v.as_str())
            .unwrap_or("(no title)");
        println!("- {} - {}", id, title);
    }

    Ok(())
}
