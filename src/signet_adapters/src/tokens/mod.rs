pub mod jwt_session_service;
