use crate::geo::CityCountryResolver;
use std::sync::Arc;

pub struct AppState {
    pub resolver: Arc<CityCountryResolver>,
}
