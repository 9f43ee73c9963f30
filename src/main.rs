// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;
use storesearch::config::settings::Settings;
use storesearch::domain::models::{Category, SearchState};
use storesearch::domain::services::{SearchCompletion, SearchService};
use storesearch::infrastructure::search::{ArtworkLoader, ITunesClient};
use storesearch::utils::telemetry;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::info;

const HELP: &str = "Type a query to search. Commands: :all :music :software :ebooks :art <n> :help :quit";

fn render(state: &SearchState, completion: SearchCompletion) {
    if !completion.success {
        println!("Whoops... There was an error accessing the iTunes Store. Please try again.");
        return;
    }

    match state {
        SearchState::NoResults => println!("Nothing found"),
        SearchState::Results(results) => {
            for (index, result) in results.iter().enumerate() {
                println!(
                    "{:>3}. {} | {} | {}",
                    index + 1,
                    result.name,
                    result.subtitle(),
                    result.price_text()
                );
            }
        }
        SearchState::Loading | SearchState::NotSearchedYet => {}
    }
}

/// 主函数
///
/// 读取标准输入中的查询，交给搜索服务执行，并在完成时渲染结果
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting storesearch...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!(base_url = %settings.itunes.base_url, "Configuration loaded");

    // 3. Build transport and service
    let client = ITunesClient::new(&settings.itunes)?;
    let artwork = ArtworkLoader::new(client.http_client().clone());
    let (service, mut completions) =
        SearchService::new(Arc::new(client), settings.itunes.base_url.clone());
    let service = Arc::new(service);

    // 4. Render completions as they arrive
    let render_service = Arc::clone(&service);
    let renderer = tokio::spawn(async move {
        while let Some(completion) = completions.recv().await {
            if completion.request_id != render_service.current_request() {
                continue;
            }
            render(&render_service.state(), completion);
        }
    });

    // 5. Read queries until EOF or :quit
    println!("{}", HELP);
    let mut category = Category::All;
    let mut artwork_download: Option<JoinHandle<()>> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match line.as_str() {
            ":quit" => break,
            ":help" => println!("{}", HELP),
            ":all" | ":music" | ":software" | ":ebooks" => {
                if let Ok(selected) = line[1..].parse::<Category>() {
                    category = selected;
                    println!("Category: {}", category);
                }
            }
            command if command.starts_with(":art") => {
                let index = command[4..].trim().parse::<usize>().ok();
                let state = service.state();
                let Some(result) = index
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| state.results().get(i))
                else {
                    println!("No such result");
                    continue;
                };

                if let Some(previous) = artwork_download.take() {
                    previous.abort();
                }
                let loader = artwork.clone();
                let name = result.name.clone();
                let url = result.artwork_large_url.clone();
                artwork_download = Some(tokio::spawn(async move {
                    match loader.download(&url).await {
                        Ok(bytes) => println!("Artwork for {}: {} bytes", name, bytes.len()),
                        Err(e) => println!("Artwork for {} unavailable: {}", name, e),
                    }
                }));
            }
            text => {
                if service.perform_search(text, category).is_some() {
                    println!("Searching {} for \"{}\"...", category, text);
                }
            }
        }
    }

    renderer.abort();
    info!("storesearch exiting");
    Ok(())
}
