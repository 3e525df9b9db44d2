pub mod id_sequence;
pub mod local_account;
pub mod local_gateway;
