//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::SpotifyClient;
use crate::config::Settings;
use crate::error::{Result, ResultExt};
use crate::pagination::Paginator;
use crate::query::{
    AdditionalType, ItemsQuery, MarketQuery, PageQuery, RecentlyPlayedQuery, RecommendationsQuery,
};
use crate::types::ObjectType;
use crate::uri::create_spotify_uri;
use futures::TryStreamExt;
use serde::Serialize;
use std::fmt::Display;
use std::pin::pin;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        if let Commands::Uri { object_type, id } = &self.cli.command {
            return self.uri(object_type, id);
        }

        let client = self.client()?;

        match &self.cli.command {
            Commands::Me => self.output(&client.get_me().await?),
            Commands::User { id } => self.output(&client.get_user(id).await?),
            Commands::Track {
                id,
                market,
                artists,
            } => {
                let track = client.get_track(id, &market_query(market)).await?;
                self.output(&track)?;
                if *artists {
                    for artist in track.artists(&client).await? {
                        self.output(&artist)?;
                    }
                }
                Ok(())
            }
            Commands::Album { id, market } => {
                self.output(&client.get_album(id, &market_query(market)).await?)
            }
            Commands::Artist { id } => self.output(&client.get_artist(id).await?),
            Commands::Episode { id, market } => {
                self.output(&client.get_episode(id, &market_query(market)).await?)
            }
            Commands::Show { id, market } => {
                self.output(&client.get_show(id, &market_query(market)).await?)
            }
            Commands::Playlist { id, market } => {
                self.output(&client.get_playlist(id, &market_query(market)).await?)
            }
            Commands::Playlists {
                user,
                all,
                limit,
                offset,
            } => self.playlists(&client, user.as_deref(), *all, *limit, *offset).await,
            Commands::PlaylistItems {
                id,
                all,
                limit,
                offset,
                market,
                episodes,
            } => {
                let mut query = ItemsQuery {
                    limit: *limit,
                    offset: *offset,
                    market: market.clone(),
                    ..ItemsQuery::default()
                };
                if *episodes {
                    query = query
                        .additional_type(AdditionalType::Track)
                        .additional_type(AdditionalType::Episode);
                }
                let items = client.get_playlist_items(id, &query).await?;
                self.output_paginator(&client, items, *all).await
            }
            Commands::Recent {
                all,
                limit,
                after,
                before,
            } => {
                if *all {
                    return self.output_all(&client.get_all_recently_played().await?);
                }
                let query = RecentlyPlayedQuery {
                    limit: *limit,
                    after: *after,
                    before: *before,
                };
                let items = client.get_recently_played(&query).await?;
                self.output_paginator(&client, items, false).await
            }
            Commands::Recommend {
                seed_artists,
                seed_tracks,
                seed_genres,
                limit,
                market,
            } => {
                let query = RecommendationsQuery {
                    market: market.clone(),
                    limit: *limit,
                    seed_artists: seed_artists.clone(),
                    seed_genres: seed_genres.clone(),
                    seed_tracks: seed_tracks.clone(),
                    ..RecommendationsQuery::default()
                };
                let recommendations = client.get_recommendations(&query).await?;
                self.output_all(recommendations.tracks())
            }
            Commands::Queue { uri, device } => {
                client
                    .add_item_to_playback_queue(uri, device.as_deref())
                    .await?;
                info!("Queued {}", uri);
                Ok(())
            }
            Commands::Add {
                playlist,
                uris,
                position,
            } => {
                let snapshot = client
                    .add_items_to_playlist(playlist.as_str(), uris.iter().map(String::as_str), *position)
                    .await?;
                info!("Added {} items to playlist {}", uris.len(), playlist);
                println!("{snapshot}");
                Ok(())
            }
            Commands::Uri { .. } => Ok(()),
        }
    }

    /// Build a client from the credentials file and environment
    fn client(&self) -> Result<SpotifyClient> {
        let settings = match &self.cli.credentials {
            Some(path) => Settings::from_file(path)
                .with_context(|| format!("Failed to load credentials from {}", path.display()))?,
            None => Settings::default(),
        };
        settings.with_env_overrides().into_client()
    }

    fn uri(&self, object_type: &str, id: &str) -> Result<()> {
        let object_type: ObjectType = object_type.parse()?;
        println!("{}", create_spotify_uri(object_type, id));
        Ok(())
    }

    async fn playlists(
        &self,
        client: &SpotifyClient,
        user: Option<&str>,
        all: bool,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<()> {
        if all {
            let playlists = match user {
                Some(user) => client.get_all_user_playlists(user).await?,
                None => client.get_all_client_playlists().await?,
            };
            return self.output_all(&playlists);
        }

        let query = PageQuery { limit, offset };
        let page = match user {
            Some(user) => client.get_user_playlists(user, &query).await?,
            None => client.get_client_playlists(&query).await?,
        };
        self.output_paginator(client, page, false).await
    }

    /// Print the current page, or every page when `all` is set
    async fn output_paginator<T: Serialize + Display>(
        &self,
        client: &SpotifyClient,
        mut paginator: Paginator<T>,
        all: bool,
    ) -> Result<()> {
        debug!("{} items available", paginator.total());

        if all {
            let mut stream = pin!(paginator.into_stream(client));
            while let Some(item) = stream.try_next().await? {
                self.output(&item)?;
            }
            return Ok(());
        }

        while paginator.remaining_in_page() > 0 {
            if let Some(item) = paginator.next(client).await? {
                self.output(&item)?;
            }
        }
        Ok(())
    }

    fn output_all<T: Serialize + Display>(&self, items: &[T]) -> Result<()> {
        for item in items {
            self.output(item)?;
        }
        Ok(())
    }

    /// Output an entity
    fn output<T: Serialize + Display>(&self, entity: &T) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(entity)?),
            OutputFormat::Pretty => println!("{entity}"),
        }
        Ok(())
    }
}

fn market_query(market: &Option<String>) -> MarketQuery {
    MarketQuery {
        market: market.clone(),
    }
}
