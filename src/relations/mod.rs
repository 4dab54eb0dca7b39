pub mod characteristic_velocity;
pub mod thrust_coefficient;
