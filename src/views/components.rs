//! Reusable page fragments.

use chrono::NaiveDate;

use super::{amenity_icon, escape, format_amount};
use crate::models::{BookingStatus, PaymentStatus, Property, PropertyQuery, SortBy, SortOrder};
use crate::pricing::PriceQuote;

fn date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn property_card(property: &Property) -> String {
    let image = property
        .primary_image()
        .map(|img| {
            format!(
                "<img src=\"{}\" alt=\"{}\">",
                escape(&img.url),
                escape(&img.alt)
            )
        })
        .unwrap_or_default();
    let superhost = if property.host.is_superhost {
        "<span class=\"badge superhost\">Superhost</span> "
    } else {
        ""
    };
    let amenities: String = property
        .amenities
        .iter()
        .take(3)
        .map(|a| format!("<span title=\"{}\">{}</span> ", escape(&a.name), amenity_icon(&a.icon)))
        .collect();

    format!(
        "<div class=\"card\"><a href=\"/properties/{id}\">{image}</a><div class=\"body\">\
         {superhost}<span>⭐ {rating:.1} ({reviews})</span>\
         <h3><a href=\"/properties/{id}\">{title}</a></h3>\
         <p class=\"muted\">📍 {city}, {state}</p>\
         <p class=\"muted\">{guests} guests · {bedrooms} bedrooms · {bathrooms} bathrooms</p>\
         <p>{amenities}</p>\
         <p><strong>R{rate}</strong> <span class=\"muted\">/ night</span></p></div></div>",
        id = escape(&property.id),
        title = escape(&property.title),
        rating = property.rating,
        reviews = property.review_count,
        city = escape(&property.location.city),
        state = escape(&property.location.state),
        guests = property.capacity.guests,
        bedrooms = property.capacity.bedrooms,
        bathrooms = property.capacity.bathrooms,
        rate = format_amount(property.pricing.base_rate),
    )
}

pub fn property_grid(properties: &[Property]) -> String {
    let cards: String = properties.iter().map(property_card).collect();
    format!("<div class=\"grid\">{cards}</div>")
}

/// GET form targeting the listing page, prefilled from the current query.
pub fn search_bar(query: &PropertyQuery) -> String {
    let location = query.location.as_deref().map(escape).unwrap_or_default();
    let guests = query.guests.unwrap_or(2);

    format!(
        "<form class=\"search\" method=\"get\" action=\"/properties\">\
         <label>Where<br><input name=\"location\" placeholder=\"Search destinations\" value=\"{location}\"></label>\
         <label>Check in<br><input type=\"date\" name=\"checkIn\" value=\"{check_in}\"></label>\
         <label>Check out<br><input type=\"date\" name=\"checkOut\" value=\"{check_out}\"></label>\
         <label>Guests<br><input type=\"number\" name=\"guests\" min=\"1\" max=\"16\" value=\"{guests}\"></label>\
         <button type=\"submit\">🔍 Search</button></form>",
        check_in = date_value(query.check_in),
        check_out = date_value(query.check_out),
    )
}

/// Sort selector. Keeps the other query parameters as hidden inputs.
pub fn sort_select(query: &PropertyQuery) -> String {
    let current = (query.sort_by(), query.sort_order());
    let options = [
        (SortBy::Rating, SortOrder::Desc, "Highest rated"),
        (SortBy::Price, SortOrder::Asc, "Price: low to high"),
        (SortBy::Price, SortOrder::Desc, "Price: high to low"),
        (SortBy::Newest, SortOrder::Desc, "Newest"),
    ];
    let rendered: String = options
        .iter()
        .map(|(by, order, label)| {
            let order_str = match order {
                SortOrder::Asc => "asc",
                SortOrder::Desc => "desc",
            };
            let selected = if (*by, *order) == current { " selected" } else { "" };
            format!(
                "<option value=\"{}:{}\"{selected}>{label}</option>",
                by.as_str(),
                order_str
            )
        })
        .collect();

    let mut hidden = String::new();
    let mut keep = |name: &str, value: Option<String>| {
        if let Some(value) = value {
            hidden.push_str(&format!(
                "<input type=\"hidden\" name=\"{name}\" value=\"{}\">",
                escape(&value)
            ));
        }
    };
    keep("location", query.location.clone());
    keep("guests", query.guests.map(|g| g.to_string()));
    keep("checkIn", query.check_in.map(|d| d.to_string()));
    keep("checkOut", query.check_out.map(|d| d.to_string()));
    keep("minPrice", query.min_price.map(|p| p.to_string()));
    keep("maxPrice", query.max_price.map(|p| p.to_string()));
    keep("amenities", query.amenities.clone());

    format!(
        "<form method=\"get\" action=\"/properties\" class=\"search\">{hidden}\
         <select onchange=\"var p=this.value.split(':');\
         this.form.sortBy.value=p[0];this.form.sortOrder.value=p[1];this.form.submit()\">{rendered}</select>\
         <input type=\"hidden\" name=\"sortBy\" value=\"{by}\"><input type=\"hidden\" name=\"sortOrder\" value=\"{order}\"></form>",
        by = current.0.as_str(),
        order = match current.1 {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        },
    )
}

pub fn price_breakdown(quote: &PriceQuote) -> String {
    let nights = if quote.nights == 1 { "night" } else { "nights" };
    format!(
        "<table class=\"breakdown\">\
         <tr><td>{currency} {avg} x {count} {nights}</td><td>R{subtotal}</td></tr>\
         <tr><td>Cleaning fee</td><td>R{cleaning}</td></tr>\
         <tr><td>Service fee</td><td>R{service}</td></tr>\
         <tr><td>Taxes</td><td>R{taxes}</td></tr>\
         <tr><th>Total</th><th>R{total}</th></tr></table>",
        currency = escape(&quote.currency),
        avg = format_amount(quote.subtotal / f64::from(quote.nights.max(1))),
        count = quote.nights,
        subtotal = format_amount(quote.subtotal),
        cleaning = format_amount(quote.cleaning_fee),
        service = format_amount(quote.service_fee),
        taxes = format_amount(quote.taxes),
        total = format_amount(quote.total),
    )
}

/// Booking request form posting JSON to `/api/booking`.
pub fn booking_form(
    property: &Property,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
) -> String {
    format!(
        "<form class=\"stacked\" data-endpoint=\"/api/booking\">\
         <input type=\"hidden\" name=\"propertyId\" value=\"{id}\">\
         <label>Check in<input type=\"date\" name=\"checkIn\" value=\"{check_in}\" required></label>\
         <label>Check out<input type=\"date\" name=\"checkOut\" value=\"{check_out}\" required></label>\
         <label>Guests<input type=\"number\" name=\"guests\" min=\"1\" max=\"{max_guests}\" value=\"2\"></label>\
         <input name=\"firstName\" placeholder=\"First name\" required>\
         <input name=\"lastName\" placeholder=\"Last name\" required>\
         <input type=\"email\" name=\"email\" placeholder=\"Email\" required>\
         <input type=\"tel\" name=\"phone\" placeholder=\"Phone\" required>\
         <textarea name=\"specialRequests\" rows=\"3\" placeholder=\"Special requests\"></textarea>\
         <div class=\"banner\"></div>\
         <button type=\"submit\">Reserve</button>\
         <p class=\"muted\">You won't be charged yet</p></form>",
        id = escape(&property.id),
        check_in = date_value(check_in),
        check_out = date_value(check_out),
        max_guests = property.capacity.guests,
    )
}

pub fn booking_status_badge(status: BookingStatus) -> String {
    let class = match status {
        BookingStatus::Confirmed | BookingStatus::Completed => "ok",
        BookingStatus::Pending => "wait",
        BookingStatus::Cancelled | BookingStatus::NoShow => "off",
    };
    format!("<span class=\"badge {class}\">{}</span>", status.as_str())
}

pub fn payment_status_badge(status: PaymentStatus) -> String {
    let class = match status {
        PaymentStatus::Paid => "ok",
        PaymentStatus::Pending => "wait",
        PaymentStatus::Refunded | PaymentStatus::Failed => "off",
    };
    format!("<span class=\"badge {class}\">{}</span>", status.as_str())
}

pub fn stat_card(label: &str, value: &str) -> String {
    format!(
        "<div class=\"card\"><div class=\"body\"><p class=\"muted\">{}</p><h2>{}</h2></div></div>",
        escape(label),
        escape(value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_catalog;
    use crate::pricing;

    #[test]
    fn test_property_card_links_and_escapes() {
        let catalog = test_catalog();
        let villa = catalog.get_property_by_id("beachfront-villa").unwrap();
        let html = property_card(villa);

        assert!(html.contains("href=\"/properties/beachfront-villa\""));
        assert!(html.contains("Superhost"));
        assert!(html.contains("R8,100"));
        assert!(html.contains("Malibu, California"));
    }

    #[test]
    fn test_search_bar_prefills_query() {
        let query = PropertyQuery {
            location: Some("\"Aspen\"".to_string()),
            guests: Some(5),
            check_in: NaiveDate::from_ymd_opt(2025, 3, 4),
            ..PropertyQuery::default()
        };
        let html = search_bar(&query);

        assert!(html.contains("value=\"&quot;Aspen&quot;\""));
        assert!(html.contains("value=\"5\""));
        assert!(html.contains("name=\"checkIn\" value=\"2025-03-04\""));
        assert!(html.contains("name=\"checkOut\" value=\"\""));
    }

    #[test]
    fn test_sort_select_marks_current_choice() {
        let query = PropertyQuery {
            sort_by: Some(SortBy::Price),
            ..PropertyQuery::default()
        };
        let html = sort_select(&query);
        assert!(html.contains("<option value=\"price:asc\" selected>"));
        assert!(!html.contains("<option value=\"rating:desc\" selected>"));
    }

    #[test]
    fn test_booking_form_carries_property_id() {
        let catalog = test_catalog();
        let cabin = catalog.get_property_by_id("mountain-cabin").unwrap();
        let html = booking_form(cabin, None, None);

        assert!(html.contains("data-endpoint=\"/api/booking\""));
        assert!(html.contains("name=\"propertyId\" value=\"mountain-cabin\""));
        assert!(html.contains("max=\"6\""));
    }

    #[test]
    fn test_price_breakdown_totals() {
        let catalog = test_catalog();
        let villa = catalog.get_property_by_id("beachfront-villa").unwrap();
        let quote = pricing::quote(villa, None, None).unwrap();
        let html = price_breakdown(&quote);

        assert!(html.contains("1 night"));
        assert!(html.contains("<th>R12,510</th>"));
    }

    #[test]
    fn test_status_badges() {
        assert!(booking_status_badge(BookingStatus::Pending).contains("badge wait"));
        assert!(payment_status_badge(PaymentStatus::Paid).contains(">paid<"));
    }
}
