//! Listing and property detail pages.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::components::{booking_form, price_breakdown, property_grid, search_bar, sort_select};
use super::{amenity_icon, escape, layout};
use crate::api::{search_catalog, StayQuery};
use crate::models::{Property, PropertyQuery};
use crate::pricing;
use crate::AppState;

/// GET /properties - Filtered listing with a result count and sort control.
pub async fn properties_page(
    State(state): State<AppState>,
    Query(query): Query<PropertyQuery>,
) -> Html<String> {
    let results = match search_catalog(&state.catalog, &query) {
        Ok(page) => {
            let count = if page.total == 1 {
                "1 property found".to_string()
            } else {
                format!("{} properties found", page.total)
            };
            let listing = if page.data.is_empty() {
                "<div class=\"card\"><div class=\"body\"><h3>No properties found</h3>\
                 <p class=\"muted\">Try adjusting your search or clearing some filters.</p>\
                 <a href=\"/properties\">Clear filters</a></div></div>"
                    .to_string()
            } else {
                property_grid(&page.data)
            };
            format!("<h2>{count}</h2>{}{listing}", sort_select(&query))
        }
        Err(err) => format!("<div class=\"banner error\">{}</div>", escape(err.message())),
    };

    let searched = query
        .location
        .as_deref()
        .map(|location| {
            format!(
                "<p class=\"muted\">Showing results for \"{}\"</p>",
                escape(location)
            )
        })
        .unwrap_or_default();

    let body = format!(
        "<main><h1>Vacation Rentals</h1>{search}{searched}{results}</main>",
        search = search_bar(&query),
    );

    layout("Properties", "/properties", &body)
}

/// GET /properties/:id - Full listing with gallery, host, amenities and booking form.
pub async fn property_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(stay): Query<StayQuery>,
) -> Response {
    let Some(property) = state.catalog.get_property_by_id(&id) else {
        return not_found_page(&id);
    };

    // Bad dates in the query fall back to a base-rate quote.
    let quote = pricing::quote(property, stay.check_in, stay.check_out)
        .or_else(|_| pricing::quote(property, None, None));
    let breakdown = quote.map(|q| price_breakdown(&q)).unwrap_or_default();

    let similar: Vec<Property> = state
        .catalog
        .similar_properties(&id)
        .into_iter()
        .cloned()
        .collect();
    let similar_section = if similar.is_empty() {
        String::new()
    } else {
        format!("<h2>Similar Properties</h2>{}", property_grid(&similar))
    };

    let body = format!(
        "<main><p><a href=\"/properties\">← Back to properties</a></p>\
         <h1>{title}</h1>\
         <p class=\"muted\">⭐ {rating:.1} ({reviews} reviews) · 📍 {address}, {city}, {state}, {country}</p>\
         {gallery}\
         <div class=\"grid\"><section>\
         <h2>Hosted by {host}</h2>{host_details}\
         <p class=\"muted\">{guests} guests · {bedrooms} bedrooms · {beds} beds · {bathrooms} bathrooms</p>\
         <p>{description}</p>\
         <h2>What this place offers</h2><ul>{amenities}</ul></section>\
         <aside class=\"card\"><div class=\"body\">\
         <h3>R{rate} <span class=\"muted\">/ night</span></h3>{form}{breakdown}\
         <p><a href=\"/contact?propertyId={id}\">Contact host</a></p></div></aside></div>\
         {similar_section}</main>",
        title = escape(&property.title),
        rating = property.rating,
        reviews = property.review_count,
        address = escape(&property.location.address),
        city = escape(&property.location.city),
        state = escape(&property.location.state),
        country = escape(&property.location.country),
        gallery = gallery(property),
        host = escape(&property.host.name),
        host_details = host_details(property),
        guests = property.capacity.guests,
        bedrooms = property.capacity.bedrooms,
        beds = property.capacity.beds,
        bathrooms = property.capacity.bathrooms,
        description = escape(&property.description),
        amenities = amenity_list(property),
        rate = super::format_amount(property.pricing.base_rate),
        form = booking_form(property, stay.check_in, stay.check_out),
        id = escape(&property.id),
    );

    layout(&property.title, "/properties", &body).into_response()
}

fn not_found_page(id: &str) -> Response {
    tracing::debug!(property_id = %id, "Property page not found");
    let body = "<main><h1>Property Not Found</h1>\
                <p class=\"muted\">The property you're looking for doesn't exist or has been removed.</p>\
                <p><a href=\"/properties\">Browse all properties</a></p></main>";
    (StatusCode::NOT_FOUND, layout("Property Not Found", "/properties", body)).into_response()
}

fn gallery(property: &Property) -> String {
    let images: String = property
        .images
        .iter()
        .map(|img| {
            let caption = img
                .caption
                .as_deref()
                .map(|c| format!("<figcaption class=\"muted\">{}</figcaption>", escape(c)))
                .unwrap_or_default();
            format!(
                "<figure><img src=\"{}\" alt=\"{}\">{caption}</figure>",
                escape(&img.url),
                escape(&img.alt)
            )
        })
        .collect();
    format!("<div class=\"grid gallery\">{images}</div>")
}

fn host_details(property: &Property) -> String {
    let host = &property.host;
    let superhost = if host.is_superhost {
        "<span class=\"badge superhost\">Superhost</span> "
    } else {
        ""
    };
    format!(
        "<p>{superhost}<span class=\"muted\">Joined {joined} · {rate}% response rate · responds {time} · speaks {languages}</span></p>",
        joined = host.joined_date.format("%B %Y"),
        rate = host.response_rate,
        time = escape(&host.response_time),
        languages = escape(&host.languages.join(", ")),
    )
}

fn amenity_list(property: &Property) -> String {
    property
        .amenities
        .iter()
        .map(|a| format!("<li>{} {}</li>", amenity_icon(&a.icon), escape(&a.name)))
        .collect()
}
