//! Server-rendered HTML pages.
//!
//! Pages are assembled from small string-building widgets in `components`.
//! Every interpolated value goes through [`escape`].

mod admin;
mod components;
mod contact;
mod home;
mod properties;

pub use admin::*;
pub use contact::*;
pub use home::*;
pub use properties::*;

use axum::response::Html;

/// Top navigation entries, in display order.
pub const NAV_ITEMS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/properties", "Properties"),
    ("/contact", "Contact"),
    ("/admin", "Admin"),
];

const SITE_NAME: &str = "Marthinus Rentals";

const STYLES: &str = r#"
body{margin:0;font-family:system-ui,sans-serif;background:#f9fafb;color:#111827}
a{color:#2563eb;text-decoration:none}
nav.top{display:flex;justify-content:space-between;align-items:center;padding:0 2rem;height:4rem;background:#fff;border-bottom:1px solid #e5e7eb}
nav.top .brand{font-size:1.5rem;font-weight:700;color:#111827}
nav.top .links a{margin-left:1.5rem;color:#374151}
nav.top .links a.active{color:#2563eb}
main{max-width:80rem;margin:0 auto;padding:2rem}
.hero{background:linear-gradient(90deg,#2563eb,#7e22ce);color:#fff;padding:4rem 2rem;text-align:center}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(20rem,1fr));gap:2rem}
.card{background:#fff;border-radius:.75rem;box-shadow:0 4px 12px rgba(0,0,0,.08);overflow:hidden}
.card img{width:100%;height:16rem;object-fit:cover}
.card .body{padding:1.5rem}
.badge{display:inline-block;padding:.1rem .6rem;border-radius:.25rem;font-size:.8rem;font-weight:600}
.badge.superhost{background:#ef4444;color:#fff}
.badge.ok{background:#dcfce7;color:#166534}
.badge.wait{background:#fef9c3;color:#854d0e}
.badge.off{background:#fee2e2;color:#991b1b}
.banner{padding:1rem;border-radius:.5rem;margin:1rem 0}
.banner:empty{display:none}
.banner.success{background:#dcfce7}
.banner.error{background:#fee2e2}
form.search,form.stacked{display:flex;flex-wrap:wrap;gap:.75rem;align-items:end}
form.stacked{flex-direction:column;align-items:stretch}
input,select,textarea,button{padding:.5rem .75rem;border:1px solid #d1d5db;border-radius:.375rem;font:inherit}
button{background:#2563eb;color:#fff;border:none;cursor:pointer}
table{width:100%;border-collapse:collapse;background:#fff}
th,td{padding:.75rem;border-bottom:1px solid #e5e7eb;text-align:left}
.muted{color:#6b7280}
"#;

const FORM_SCRIPT: &str = r#"
document.querySelectorAll('form[data-endpoint]').forEach(function (form) {
  form.addEventListener('submit', async function (event) {
    event.preventDefault();
    var body = {};
    new FormData(form).forEach(function (value, key) { body[key] = value; });
    if (body.guests) { body.guests = parseInt(body.guests, 10); }
    var banner = form.querySelector('.banner') || document.querySelector('.banner');
    try {
      var response = await fetch(form.dataset.endpoint, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!response.ok) { throw new Error('request failed'); }
      var payload = await response.json();
      if (form.dataset.reload !== undefined) { window.location.reload(); return; }
      banner.textContent = payload.message || 'Done';
      banner.className = 'banner success';
      form.reset();
    } catch (err) {
      banner.textContent = 'Something went wrong. Please try again.';
      banner.className = 'banner error';
    }
  });
});
"#;

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `8100.0` -> `8,100`; fractional amounts keep two decimals.
pub fn format_amount(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let whole = (cents / 100).unsigned_abs().to_string();
    let fraction = (cents % 100).unsigned_abs();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if cents < 0 { "-" } else { "" };
    if fraction == 0 {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction:02}")
    }
}

/// Emoji for an amenity icon name.
pub fn amenity_icon(icon: &str) -> &'static str {
    match icon {
        "wifi" => "📶",
        "kitchen" => "🍳",
        "washer" => "👕",
        "dryer" => "💨",
        "air_conditioning" => "❄️",
        "heating" | "fireplace" => "🔥",
        "pool" => "🏊",
        "hot_tub" => "♨️",
        "gym" => "💪",
        "bbq" => "🍖",
        "tv" => "📺",
        "sound_system" => "🔊",
        "smoke_alarm" => "🚨",
        "carbon_monoxide_alarm" => "⚠️",
        "free_parking" => "🅿️",
        "beachfront" => "🏖️",
        "waterfront" => "🌊",
        "ski_in_out" => "🎿",
        "workspace" => "💻",
        _ => "✨",
    }
}

fn nav(current_path: &str) -> String {
    let links: String = NAV_ITEMS
        .iter()
        .map(|(href, label)| {
            let class = if *href == current_path { " class=\"active\"" } else { "" };
            format!("<a href=\"{href}\"{class}>{label}</a>")
        })
        .collect();

    format!(
        "<nav class=\"top\"><a class=\"brand\" href=\"/\">{SITE_NAME}</a><div class=\"links\">{links}</div></nav>"
    )
}

/// Wrap page content in the shared document shell.
pub fn layout(title: &str, current_path: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{title} | {SITE_NAME}</title><style>{STYLES}</style></head>\
         <body>{nav}{body}<script>{FORM_SCRIPT}</script></body></html>",
        title = escape(title),
        nav = nav(current_path),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape("Aspen"), "Aspen");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(8100.0), "8,100");
        assert_eq!(format_amount(12510.0), "12,510");
        assert_eq!(format_amount(1234567.0), "1,234,567");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(6048.5), "6,048.50");
        assert_eq!(format_amount(-2450.0), "-2,450");
    }

    #[test]
    fn test_amenity_icon_fallback() {
        assert_eq!(amenity_icon("pool"), "🏊");
        assert_eq!(amenity_icon("elevator"), "✨");
    }

    #[test]
    fn test_nav_marks_current_page() {
        let html = nav("/contact");
        assert!(html.contains("<a href=\"/contact\" class=\"active\">Contact</a>"));
        assert!(html.contains("<a href=\"/\">Home</a>"));
    }

    #[test]
    fn test_layout_escapes_title() {
        let Html(page) = layout("<Admin>", "/admin", "<p>ok</p>");
        assert!(page.contains("<title>&lt;Admin&gt; | Marthinus Rentals</title>"));
        assert!(page.contains("<p>ok</p>"));
    }
}
