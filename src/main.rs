//! # Store Ratings Demo
//!
//! Starts the [`RatingSystem`], registers an owner and two raters, opens a store, rates it,
//! and prints the store's statistics. Validation failures along the way are logged, not fatal.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

use actor_framework::tracing::setup_tracing;
use store_ratings::config::Settings;
use store_ratings::lifecycle::RatingSystem;
use store_ratings::model::{RatingCreate, StoreCreate, UserCreate, UserRole};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let settings = Settings::load()?;
    info!(?settings, "Starting store rating system");
    let system = RatingSystem::new(&settings);

    let span = tracing::info_span!("registration");
    let (owner, raters) = async {
        let owner = system
            .user_client
            .create_user(UserCreate {
                name: "Olive Owner Number 1".to_string(),
                email: "olive@example.com".to_string(),
                address: "1 Main St, Springfield".to_string(),
                password: Some("Bakery#2024".to_string()),
                role: Some(UserRole::Proprietor),
            })
            .await?;

        let mut raters = Vec::new();
        for (name, email) in [
            ("Rita Rater Number 22", "rita@example.com"),
            ("Sam Shopper Number 33", "sam@example.com"),
        ] {
            raters.push(
                system
                    .user_client
                    .create_user(UserCreate {
                        name: name.to_string(),
                        email: email.to_string(),
                        address: "9 Elm St, Springfield".to_string(),
                        ..Default::default()
                    })
                    .await?,
            );
        }

        // Same email, different case
        if let Err(e) = system
            .user_client
            .create_user(UserCreate {
                name: "Duplicate Person No 4".to_string(),
                email: "RITA@example.com".to_string(),
                address: "4 Elm St".to_string(),
                ..Default::default()
            })
            .await
        {
            warn!(error = %e, "Duplicate registration rejected");
        }

        Ok::<_, Box<dyn std::error::Error>>((owner, raters))
    }
    .instrument(span)
    .await?;
    info!(%owner, raters = raters.len(), "Users registered");

    let authenticated = system.user_client.authenticate(owner, "Bakery#2024").await?;
    info!(%owner, authenticated, "Owner signed in");

    let store = system
        .store_client
        .create_store(StoreCreate {
            name: "Corner Bakery No 123".to_string(),
            email: "bakery@example.com".to_string(),
            address: "12 Market St, Springfield".to_string(),
            proprietor_id: owner,
        })
        .await?;
    info!(store_id = %store, "Store opened");

    let span = tracing::info_span!("rating");
    async {
        for (rater, value) in raters.iter().zip([3, 5]) {
            system
                .rating_client
                .create_rating(RatingCreate {
                    user_id: *rater,
                    store_id: store,
                    value,
                })
                .await?;
        }

        if let Err(e) = system
            .rating_client
            .create_rating(RatingCreate {
                user_id: owner,
                store_id: store,
                value: 5,
            })
            .await
        {
            warn!(error = %e, "Self-rating rejected");
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    let stats = system.rating_statistics(store).await?;
    info!(
        average = stats.average,
        total = stats.total_ratings,
        distribution = ?stats.rating_distribution,
        "Rating statistics"
    );

    let highly_rated = system.highly_rated_stores().await?;
    info!(count = highly_rated.len(), "Highly rated stores");

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
