//! Admin dashboard page and its tabs.

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use super::components::{booking_status_badge, payment_status_badge, stat_card};
use super::{escape, format_amount, layout};
use crate::api::{load_dashboard, AdminDashboard};
use crate::calendar::format_date;
use crate::data::Catalog;
use crate::models::{Booking, BookingStatus, Property};
use crate::AppState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminTab {
    #[default]
    Overview,
    Properties,
    Bookings,
    Analytics,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Overview,
        AdminTab::Properties,
        AdminTab::Bookings,
        AdminTab::Analytics,
    ];

    fn slug(self) -> &'static str {
        match self {
            AdminTab::Overview => "overview",
            AdminTab::Properties => "properties",
            AdminTab::Bookings => "bookings",
            AdminTab::Analytics => "analytics",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AdminTab::Overview => "📊 Overview",
            AdminTab::Properties => "🏠 Properties",
            AdminTab::Bookings => "📅 Bookings",
            AdminTab::Analytics => "📈 Analytics",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AdminPageQuery {
    #[serde(default)]
    pub tab: AdminTab,
}

/// GET /admin - Dashboard over the in-memory catalog and bookings.
pub async fn admin_page(
    State(state): State<AppState>,
    Query(query): Query<AdminPageQuery>,
) -> Html<String> {
    let dashboard = load_dashboard(&state).await;

    let content = match query.tab {
        AdminTab::Overview => overview(&dashboard, &state.catalog),
        AdminTab::Properties => properties_table(state.catalog.get_all_properties()),
        AdminTab::Bookings => bookings_table(&state.bookings.list().await, &state.catalog),
        AdminTab::Analytics => analytics(&state.bookings.list().await, &state.catalog),
    };

    let tabs: String = AdminTab::ALL
        .iter()
        .map(|tab| {
            let class = if *tab == query.tab { " class=\"active\"" } else { "" };
            format!(
                "<a href=\"/admin?tab={}\"{class}>{}</a> ",
                tab.slug(),
                tab.label()
            )
        })
        .collect();

    let body = format!(
        "<main><h1>Admin Dashboard</h1><p class=\"muted\">Welcome, Admin</p>\
         <nav class=\"tabs\">{tabs}</nav><div class=\"banner\"></div>{content}</main>"
    );

    layout("Admin", "/admin", &body)
}

fn property_title<'a>(catalog: &'a Catalog, property_id: &'a str) -> &'a str {
    catalog
        .get_property_by_id(property_id)
        .map_or(property_id, |p| p.title.as_str())
}

fn overview(dashboard: &AdminDashboard, catalog: &Catalog) -> String {
    let stats = &dashboard.stats;
    let cards = [
        stat_card("🏠 Total Properties", &stats.total_properties.to_string()),
        stat_card("📅 Total Bookings", &stats.total_bookings.to_string()),
        stat_card("✅ Confirmed Bookings", &stats.confirmed_bookings.to_string()),
        stat_card("💰 Total Revenue", &format!("R{}", format_amount(stats.total_revenue))),
    ]
    .concat();

    let recent: String = dashboard
        .recent_bookings
        .iter()
        .map(|b| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>R{}</td></tr>",
                escape(&b.guest.full_name()),
                escape(property_title(catalog, &b.property_id)),
                booking_status_badge(b.status),
                format_amount(b.total_price)
            )
        })
        .collect();

    let top: String = dashboard
        .top_properties
        .iter()
        .map(|p| {
            format!(
                "<tr><td><a href=\"/properties/{}\">{}</a></td><td>⭐ {:.1}</td><td>R{}</td></tr>",
                escape(&p.id),
                escape(&p.title),
                p.rating,
                format_amount(p.pricing.base_rate)
            )
        })
        .collect();

    format!(
        "<div class=\"grid\">{cards}</div>\
         <h2>Recent Bookings</h2><table>{recent}</table>\
         <h2>Top Properties</h2><table>{top}</table>"
    )
}

fn properties_table(properties: &[Property]) -> String {
    let rows: String = properties
        .iter()
        .map(|p| {
            format!(
                "<tr><td><a href=\"/properties/{id}\">{title}</a></td><td>{city}, {state}</td>\
                 <td>R{rate}</td><td>⭐ {rating:.1} ({reviews})</td>\
                 <td><span class=\"badge ok\">Active</span></td></tr>",
                id = escape(&p.id),
                title = escape(&p.title),
                city = escape(&p.location.city),
                state = escape(&p.location.state),
                rate = format_amount(p.pricing.base_rate),
                rating = p.rating,
                reviews = p.review_count,
            )
        })
        .collect();

    format!(
        "<h2>Properties Management</h2><table>\
         <tr><th>Property</th><th>Location</th><th>Price</th><th>Rating</th><th>Status</th></tr>\
         {rows}</table>"
    )
}

fn booking_actions(booking: &Booking) -> String {
    let action = |verb: &str, label: &str| {
        format!(
            "<form data-endpoint=\"/api/admin/bookings/{}/{verb}\" data-reload>\
             <button type=\"submit\">{label}</button></form>",
            escape(&booking.id)
        )
    };
    match booking.status {
        BookingStatus::Pending => format!("{}{}", action("confirm", "Confirm"), action("cancel", "Cancel")),
        BookingStatus::Confirmed => action("cancel", "Cancel"),
        _ => String::new(),
    }
}

fn bookings_table(bookings: &[Booking], catalog: &Catalog) -> String {
    let rows: String = bookings
        .iter()
        .map(|b| {
            format!(
                "<tr><td>{guest}<br><span class=\"muted\">{email}</span></td><td>{property}</td>\
                 <td>{check_in} - {check_out}<br><span class=\"muted\">{guests} guests</span></td>\
                 <td>{status}</td><td>{payment}</td><td>R{total}</td><td>{actions}</td></tr>",
                guest = escape(&b.guest.full_name()),
                email = escape(&b.guest.email),
                property = escape(property_title(catalog, &b.property_id)),
                check_in = format_date(b.check_in),
                check_out = format_date(b.check_out),
                guests = b.guests,
                status = booking_status_badge(b.status),
                payment = payment_status_badge(b.payment_status),
                total = format_amount(b.total_price),
                actions = booking_actions(b),
            )
        })
        .collect();

    format!(
        "<h2>Bookings Management</h2><table>\
         <tr><th>Guest</th><th>Property</th><th>Dates</th><th>Status</th><th>Payment</th><th>Total</th><th>Actions</th></tr>\
         {rows}</table>"
    )
}

/// Revenue and booking counts per property. Cancelled bookings are left out.
fn analytics(bookings: &[Booking], catalog: &Catalog) -> String {
    let rows: String = catalog
        .get_all_properties()
        .iter()
        .map(|p| {
            let active: Vec<&Booking> = bookings
                .iter()
                .filter(|b| b.property_id == p.id && b.status != BookingStatus::Cancelled)
                .collect();
            let revenue: f64 = active.iter().map(|b| b.total_price).sum();
            let nights: i64 = active
                .iter()
                .map(|b| (b.check_out - b.check_in).num_days())
                .sum();
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>R{}</td></tr>",
                escape(&p.title),
                active.len(),
                nights,
                format_amount(revenue)
            )
        })
        .collect();

    format!(
        "<h2>Analytics Dashboard</h2><table>\
         <tr><th>Property</th><th>Bookings</th><th>Nights</th><th>Revenue</th></tr>\
         {rows}</table>"
    )
}
