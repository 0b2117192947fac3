//! Static sample listings and mock bookings.

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;

use super::availability::{generate_availability, AvailabilitySettings};
use crate::models::{
    Amenity, AmenityCategory, Booking, BookingStatus, Capacity, Coordinates, Guest, Host,
    Location, PaymentStatus, Pricing, Property, PropertyImage, SeasonalRate,
};

const AMENITIES: &[(&str, &str, AmenityCategory)] = &[
    ("wifi", "WiFi", AmenityCategory::Internet),
    ("kitchen", "Kitchen", AmenityCategory::Kitchen),
    ("washer", "Washer", AmenityCategory::Essentials),
    ("dryer", "Dryer", AmenityCategory::Essentials),
    ("air_conditioning", "Air conditioning", AmenityCategory::Essentials),
    ("heating", "Heating", AmenityCategory::Essentials),
    ("workspace", "Dedicated workspace", AmenityCategory::Essentials),
    ("pool", "Pool", AmenityCategory::Features),
    ("hot_tub", "Hot tub", AmenityCategory::Features),
    ("gym", "Gym", AmenityCategory::Features),
    ("bbq", "BBQ grill", AmenityCategory::Features),
    ("fireplace", "Fireplace", AmenityCategory::Features),
    ("beachfront", "Beachfront", AmenityCategory::Location),
    ("waterfront", "Waterfront", AmenityCategory::Location),
    ("ski_in_out", "Ski-in/Ski-out", AmenityCategory::Location),
    ("smoke_alarm", "Smoke alarm", AmenityCategory::Safety),
    ("carbon_monoxide_alarm", "Carbon monoxide alarm", AmenityCategory::Safety),
    ("first_aid_kit", "First aid kit", AmenityCategory::Safety),
    ("tv", "TV", AmenityCategory::Entertainment),
    ("sound_system", "Sound system", AmenityCategory::Entertainment),
    ("game_console", "Game console", AmenityCategory::Entertainment),
    ("free_parking", "Free parking", AmenityCategory::Features),
    ("ev_charger", "EV charger", AmenityCategory::Features),
    ("wheelchair_accessible", "Wheelchair accessible", AmenityCategory::Accessibility),
    ("elevator", "Elevator", AmenityCategory::Accessibility),
];

pub fn sample_amenities() -> Vec<Amenity> {
    AMENITIES
        .iter()
        .map(|(id, name, category)| Amenity {
            id: (*id).to_string(),
            name: (*name).to_string(),
            icon: (*id).to_string(),
            category: *category,
        })
        .collect()
}

fn pick_amenities(all: &[Amenity], ids: &[&str]) -> Vec<Amenity> {
    all.iter()
        .filter(|a| ids.contains(&a.id.as_str()))
        .cloned()
        .collect()
}

fn image(id: &str, photo: &str, alt: &str, is_primary: bool, caption: &str) -> PropertyImage {
    PropertyImage {
        id: id.to_string(),
        url: format!("https://images.unsplash.com/{photo}?w=800&h=600&fit=crop"),
        alt: alt.to_string(),
        is_primary,
        caption: Some(caption.to_string()),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn timestamp(raw: &str) -> DateTime<Utc> {
    raw.parse().unwrap_or_default()
}

fn season(start: NaiveDate, end: NaiveDate, rate: f64, minimum_stay: u32) -> SeasonalRate {
    SeasonalRate {
        start_date: start,
        end_date: end,
        rate,
        minimum_stay: Some(minimum_stay),
    }
}

fn languages(list: &[&str]) -> Vec<String> {
    list.iter().map(|l| (*l).to_string()).collect()
}

/// Build the two sample listings, each with a fresh availability window from `today`.
pub fn sample_properties<R: Rng>(
    rng: &mut R,
    today: NaiveDate,
    settings: &AvailabilitySettings,
) -> Vec<Property> {
    let amenities = sample_amenities();

    let villa = Property {
        id: "beachfront-villa".to_string(),
        title: "Luxury Beachfront Villa with Private Pool".to_string(),
        description: "Experience paradise in this stunning beachfront villa featuring panoramic \
            ocean views, a private infinity pool, and direct beach access. Perfect for families \
            or couples seeking a luxurious coastal getaway."
            .to_string(),
        location: Location {
            address: "123 Ocean Drive".to_string(),
            city: "Malibu".to_string(),
            state: "California".to_string(),
            country: "United States".to_string(),
            coordinates: Coordinates {
                lat: 34.0259,
                lng: -118.7798,
            },
        },
        images: vec![
            image(
                "beachfront-1",
                "photo-1571896349842-33c89424de2d",
                "Beachfront villa exterior with ocean view",
                true,
                "Stunning oceanfront villa with private pool",
            ),
            image(
                "beachfront-2",
                "photo-1586023492125-27b2c045efd7",
                "Living room with ocean view",
                false,
                "Spacious living area with panoramic views",
            ),
            image(
                "beachfront-3",
                "photo-1584132915807-fd0608e96355",
                "Master bedroom",
                false,
                "Luxurious master suite",
            ),
            image(
                "beachfront-4",
                "photo-1571508601891-ca5e7a713859",
                "Private pool and patio",
                false,
                "Private infinity pool overlooking the ocean",
            ),
            image(
                "beachfront-5",
                "photo-1564013799919-ab600027ffc6",
                "Modern kitchen",
                false,
                "Fully equipped modern kitchen",
            ),
        ],
        amenities: pick_amenities(
            &amenities,
            &[
                "wifi",
                "kitchen",
                "washer",
                "dryer",
                "air_conditioning",
                "heating",
                "pool",
                "beachfront",
                "bbq",
                "tv",
                "sound_system",
                "smoke_alarm",
                "carbon_monoxide_alarm",
                "free_parking",
            ],
        ),
        pricing: Pricing {
            base_rate: 8100.0,
            currency: "ZAR".to_string(),
            cleaning_fee: 2700.0,
            service_fee: 810.0,
            taxes: 900.0,
            seasonal_rates: vec![
                season(date(2024, 6, 1), date(2024, 8, 31), 9900.0, 3),
                season(date(2024, 12, 20), date(2025, 1, 5), 10800.0, 4),
            ],
            minimum_stay: Some(2),
            maximum_stay: Some(14),
        },
        capacity: Capacity {
            guests: 8,
            bedrooms: 4,
            bathrooms: 3,
            beds: 4,
        },
        availability: generate_availability(rng, today, 8100.0, true, settings),
        rating: 4.9,
        review_count: 127,
        host: Host {
            id: "host-1".to_string(),
            name: "Sarah Johnson".to_string(),
            avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&h=150&fit=crop&crop=face"
                .to_string(),
            is_superhost: true,
            response_rate: 98,
            response_time: "within an hour".to_string(),
            joined_date: date(2019, 3, 15),
            languages: languages(&["English", "Spanish"]),
        },
        created_at: timestamp("2023-01-15T10:00:00Z"),
        updated_at: timestamp("2024-01-15T10:00:00Z"),
    };

    let cabin = Property {
        id: "mountain-cabin".to_string(),
        title: "Cozy Mountain Cabin with Hot Tub".to_string(),
        description: "Escape to this charming mountain cabin nestled in the pines. Features a \
            private hot tub, stone fireplace, and breathtaking mountain views. Ideal for a \
            romantic getaway or family retreat."
            .to_string(),
        location: Location {
            address: "456 Pine Ridge Road".to_string(),
            city: "Aspen".to_string(),
            state: "Colorado".to_string(),
            country: "United States".to_string(),
            coordinates: Coordinates {
                lat: 39.1911,
                lng: -106.8175,
            },
        },
        images: vec![
            image(
                "cabin-1",
                "photo-1449824913935-59a10b8d2000",
                "Mountain cabin exterior in winter",
                true,
                "Rustic mountain cabin surrounded by pine trees",
            ),
            image(
                "cabin-2",
                "photo-1578662996442-48f60103fc96",
                "Cozy living room with fireplace",
                false,
                "Warm and inviting living space with stone fireplace",
            ),
            image(
                "cabin-3",
                "photo-1586375300773-8384e3e4916f",
                "Rustic bedroom",
                false,
                "Comfortable bedroom with mountain views",
            ),
            image(
                "cabin-4",
                "photo-1571896349842-33c89424de2d",
                "Private hot tub",
                false,
                "Private hot tub under the stars",
            ),
            image(
                "cabin-5",
                "photo-1558618666-fcd25c85cd64",
                "Mountain views from deck",
                false,
                "Spectacular mountain views from the deck",
            ),
        ],
        amenities: pick_amenities(
            &amenities,
            &[
                "wifi",
                "kitchen",
                "washer",
                "dryer",
                "heating",
                "workspace",
                "hot_tub",
                "fireplace",
                "bbq",
                "tv",
                "smoke_alarm",
                "carbon_monoxide_alarm",
                "free_parking",
                "ski_in_out",
            ],
        ),
        pricing: Pricing {
            base_rate: 5040.0,
            currency: "ZAR".to_string(),
            cleaning_fee: 1800.0,
            service_fee: 504.0,
            taxes: 630.0,
            seasonal_rates: vec![
                season(date(2024, 12, 1), date(2025, 3, 31), 6300.0, 2),
                season(date(2024, 7, 1), date(2024, 8, 31), 5760.0, 2),
            ],
            minimum_stay: Some(2),
            maximum_stay: Some(10),
        },
        capacity: Capacity {
            guests: 6,
            bedrooms: 3,
            bathrooms: 2,
            beds: 3,
        },
        availability: generate_availability(rng, today, 5040.0, true, settings),
        rating: 4.8,
        review_count: 89,
        host: Host {
            id: "host-2".to_string(),
            name: "Michael Chen".to_string(),
            avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face"
                .to_string(),
            is_superhost: true,
            response_rate: 95,
            response_time: "within 2 hours".to_string(),
            joined_date: date(2018, 11, 22),
            languages: languages(&["English", "Mandarin"]),
        },
        created_at: timestamp("2023-02-20T10:00:00Z"),
        updated_at: timestamp("2024-02-20T10:00:00Z"),
    };

    vec![villa, cabin]
}

/// Bookings shown on the admin dashboard before anyone submits one.
pub fn mock_bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: "booking-1".to_string(),
            property_id: "beachfront-villa".to_string(),
            guest: Guest {
                id: "guest-1".to_string(),
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                email: "john@example.com".to_string(),
                phone: "+1234567890".to_string(),
                avatar: None,
            },
            check_in: date(2024, 1, 15),
            check_out: date(2024, 1, 20),
            guests: 4,
            total_price: 2450.0,
            status: BookingStatus::Confirmed,
            created_at: timestamp("2024-01-10T10:00:00Z"),
            updated_at: timestamp("2024-01-10T10:00:00Z"),
            special_requests: None,
            payment_status: PaymentStatus::Paid,
        },
        Booking {
            id: "booking-2".to_string(),
            property_id: "mountain-cabin".to_string(),
            guest: Guest {
                id: "guest-2".to_string(),
                first_name: "Jane".to_string(),
                last_name: "Smith".to_string(),
                email: "jane@example.com".to_string(),
                phone: "+0987654321".to_string(),
                avatar: None,
            },
            check_in: date(2024, 2, 1),
            check_out: date(2024, 2, 5),
            guests: 2,
            total_price: 1680.0,
            status: BookingStatus::Pending,
            created_at: timestamp("2024-01-20T14:30:00Z"),
            updated_at: timestamp("2024-01-20T14:30:00Z"),
            special_requests: None,
            payment_status: PaymentStatus::Pending,
        },
    ]
}
