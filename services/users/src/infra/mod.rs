pub mod db;
pub mod dispatch;
