// Protection proxy: same interface, access checked first

use log::{info, warn};

use crate::error::{Result, WorkshopError};

pub const DEFAULT_MINIMUM_AGE: u32 = 16;

pub trait Drive {
    fn drive(&self) -> Result<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Car;

impl Drive for Car {
    fn drive(&self) -> Result<String> {
        info!("car started");
        Ok("Car is being driven".to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Driver {
    pub age: u32,
}

impl Driver {
    pub fn new(age: u32) -> Self {
        Self { age }
    }
}

/// Lets the driver through to the car only when old enough.
#[derive(Debug, Clone)]
pub struct CarProxy {
    driver: Driver,
    minimum_age: u32,
    car: Car,
}

impl CarProxy {
    pub fn new(driver: Driver) -> Self {
        Self::with_minimum_age(driver, DEFAULT_MINIMUM_AGE)
    }

    pub fn with_minimum_age(driver: Driver, minimum_age: u32) -> Self {
        Self {
            driver,
            minimum_age,
            car: Car,
        }
    }
}

impl Drive for CarProxy {
    fn drive(&self) -> Result<String> {
        if self.driver.age < self.minimum_age {
            warn!("refusing driver aged {}", self.driver.age);
            return Err(WorkshopError::AccessDenied {
                age: self.driver.age,
                minimum: self.minimum_age,
            });
        }
        self.car.drive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_old_enough_driver() {
        let car: Box<dyn Drive> = Box::new(CarProxy::new(Driver::new(16)));
        assert_eq!(car.drive().unwrap(), "Car is being driven");
    }

    #[test]
    fn test_too_young_driver() {
        let car = CarProxy::new(Driver::new(12));
        assert!(matches!(
            car.drive(),
            Err(WorkshopError::AccessDenied { age: 12, minimum: 16 })
        ));
    }

    #[test]
    fn test_custom_minimum_age() {
        let car = CarProxy::with_minimum_age(Driver::new(17), 18);
        assert!(car.drive().is_err());
    }
}
