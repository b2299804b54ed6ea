// End-to-end: the directory view loading from a live server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use tokio::net::TcpListener;

use dota_players::api::create_router;
use dota_players::api::handlers::AppState;
use dota_players::config::settings::AppConfig;
use dota_players::directory::{Player, PlayerSource, StaticDirectory};
use dota_players::view::render::{render_page, NO_RESULTS_TEXT};
use dota_players::view::{DirectoryClient, DirectoryView, LoadState, TeamFilter};

struct FailingDirectory;

impl PlayerSource for FailingDirectory {
    fn players(&self) -> Result<&[Player]> {
        Err(anyhow!("directory unavailable"))
    }
}

async fn spawn_server(source: Arc<dyn PlayerSource>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(Arc::new(AppState::new(source)));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn load_view(base_url: &str) -> DirectoryView {
    let config = AppConfig::new();
    let client = DirectoryClient::new(base_url, config.view.user_agent).unwrap();
    let mut view = DirectoryView::new();
    view.settle(client.fetch().await);
    view
}

fn ids(view: &DirectoryView) -> Vec<String> {
    view.displayed().iter().map(|p| p.id.clone()).collect()
}

#[tokio::test]
async fn test_view_loads_full_directory() {
    let addr = spawn_server(Arc::new(StaticDirectory)).await;

    let view = load_view(&format!("http://{}", addr)).await;

    match view.state() {
        LoadState::Ready(players) => {
            assert_eq!(players.len(), 20);
            assert_eq!(players[0].name, "Ame");
        }
        other => panic!("expected ready view, got {:?}", other),
    }
    assert_eq!(view.stats().teams, 5);
    assert_eq!(view.stats().tournaments, 9);
}

#[tokio::test]
async fn test_search_ame_keeps_all_teams() {
    let addr = spawn_server(Arc::new(StaticDirectory)).await;
    let mut view = load_view(&format!("http://{}", addr)).await;

    view.set_search("ame");

    let shown = ids(&view);
    assert!(shown.contains(&"1".to_string()));
    assert_eq!(view.team(), &TeamFilter::All);
    for player in view.displayed() {
        let matched = player.name.to_lowercase().contains("ame")
            || player.real_name.to_lowercase().contains("ame");
        assert!(matched, "{} should not be shown", player.name);
    }
}

#[tokio::test]
async fn test_team_filter_lgd() {
    let addr = spawn_server(Arc::new(StaticDirectory)).await;
    let mut view = load_view(&format!("http://{}", addr)).await;

    view.set_team(TeamFilter::from("LGD Gaming"));

    assert_eq!(ids(&view), vec!["6", "7", "8", "9", "10"]);
}

#[tokio::test]
async fn test_no_match_renders_no_results() {
    colored::control::set_override(false);
    let addr = spawn_server(Arc::new(StaticDirectory)).await;
    let mut view = load_view(&format!("http://{}", addr)).await;

    view.set_search("zzz-no-match");

    let page = render_page(&view, AppConfig::new().view.date_format);
    assert!(view.displayed().is_empty());
    assert!(page.contains(NO_RESULTS_TEXT));
}

#[tokio::test]
async fn test_transport_failure_settles_in_error() {
    colored::control::set_override(false);
    // Reserve a port, then release it so nothing is listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let view = load_view(&format!("http://{}", addr)).await;

    match view.state() {
        LoadState::Error(message) => assert!(!message.is_empty()),
        other => panic!("expected error view, got {:?}", other),
    }
    let page = render_page(&view, AppConfig::new().view.date_format);
    assert!(view.displayed().is_empty());
    assert!(!page.contains("Tournaments ("));
}

#[tokio::test]
async fn test_server_reported_failure_settles_in_error() {
    let addr = spawn_server(Arc::new(FailingDirectory)).await;

    let view = load_view(&format!("http://{}", addr)).await;

    assert_eq!(
        view.state(),
        &LoadState::Error("Failed to fetch player data".to_string())
    );
}
