//! Contact page with the message form.

use axum::{extract::Query, response::Html};
use serde::Deserialize;

use super::{escape, layout};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPageQuery {
    pub property_id: Option<String>,
}

/// GET /contact - Contact form posting JSON to `/api/contact`.
pub async fn contact_page(Query(query): Query<ContactPageQuery>) -> Html<String> {
    let property_id = query
        .property_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(escape)
        .unwrap_or_default();

    let body = format!(
        "<main><h1>Get in Touch</h1>\
         <p class=\"muted\">Questions about a stay? Send us a message and we'll get back to you.</p>\
         <form class=\"stacked\" data-endpoint=\"/api/contact\">\
         <input type=\"hidden\" name=\"propertyId\" value=\"{property_id}\">\
         <input name=\"name\" placeholder=\"Your name\" required>\
         <input type=\"email\" name=\"email\" placeholder=\"Email\" required>\
         <input name=\"subject\" placeholder=\"Subject\" required>\
         <textarea name=\"message\" rows=\"6\" placeholder=\"Message\" required></textarea>\
         <div class=\"banner\"></div>\
         <button type=\"submit\">Send Message</button></form>\
         <h2>Contact Information</h2>\
         <p>📧 support@marthinus-rentals.com <span class=\"muted\">We respond within 24 hours</span></p>\
         <p>📞 +1 (555) 123-4567 <span class=\"muted\">Mon-Fri 9AM-6PM EST</span></p>\
         <p>📍 123 Rental Street, San Francisco, CA 94105</p>\
         <p>💬 Live chat available 24/7</p></main>"
    );

    layout("Contact", "/contact", &body)
}
