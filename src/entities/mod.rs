//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod daily_meal;
pub mod grocery;
pub mod locked_month;
pub mod meal_deposit;
pub mod member;
pub mod utility;
pub mod utility_deposit;
pub mod utility_payment;

// Re-export specific types to avoid conflicts
pub use daily_meal::{Column as DailyMealColumn, Entity as DailyMeal, Model as DailyMealModel};
pub use grocery::{Column as GroceryColumn, Entity as Grocery, Model as GroceryModel};
pub use locked_month::{
    Column as LockedMonthColumn, Entity as LockedMonth, Model as LockedMonthModel,
};
pub use meal_deposit::{
    Column as MealDepositColumn, Entity as MealDeposit, Model as MealDepositModel,
};
pub use member::{Column as MemberColumn, Entity as Member, Model as MemberModel};
pub use utility::{Column as UtilityColumn, Entity as Utility, Model as UtilityModel};
pub use utility_deposit::{
    Column as UtilityDepositColumn, Entity as UtilityDeposit, Model as UtilityDepositModel,
};
pub use utility_payment::{
    Column as UtilityPaymentColumn, Entity as UtilityPayment, Model as UtilityPaymentModel,
};
