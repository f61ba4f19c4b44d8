//! Location and contact records.

/// A point on the globe. Altitude is in metres.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geopoint {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
}

impl Geopoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            altitude: None,
        }
    }

    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = Some(altitude);
        self
    }
}

/// Postal address and contact channels of a business or place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactData {
    pub street_address: Option<String>,
    pub locality: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub fax_number: Option<String>,
    pub website: Option<String>,
}

macro_rules! with_field {
    ($($method:ident => $field:ident),* $(,)?) => {
        $(
            pub fn $method(mut self, value: impl Into<String>) -> Self {
                self.$field = Some(value.into());
                self
            }
        )*
    };
}

impl ContactData {
    pub fn new() -> Self {
        Self::default()
    }

    with_field! {
        with_street_address => street_address,
        with_locality => locality,
        with_region => region,
        with_postal_code => postal_code,
        with_country_name => country_name,
        with_email => email,
        with_phone => phone,
        with_fax_number => fax_number,
        with_website => website,
    }
}
