pub mod presence_api;
