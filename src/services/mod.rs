pub mod currency_service;
