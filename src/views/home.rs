//! Home page: hero search and featured listings.

use axum::{extract::State, response::Html};

use super::components::{property_grid, search_bar};
use super::layout;
use crate::models::PropertyQuery;
use crate::AppState;

/// GET / - Hero, search bar and featured listings.
pub async fn home_page(State(state): State<AppState>) -> Html<String> {
    let featured = state.catalog.get_featured_properties();

    let body = format!(
        "<section class=\"hero\"><h1>Find Your Perfect Getaway</h1>\
         <p>Discover unique vacation rentals in the world's most beautiful destinations.</p>\
         {search}</section>\
         <main><h2>Featured Properties</h2>\
         <p class=\"muted\">Hand-picked stays loved by our guests.</p>{grid}\
         <p><a href=\"/properties\">View all properties →</a></p></main>",
        search = search_bar(&PropertyQuery::default()),
        grid = property_grid(featured),
    );

    layout("Vacation Rentals", "/", &body)
}
