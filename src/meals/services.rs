use time::{Date, OffsetDateTime};
use tracing::{debug, info};
use uuid::Uuid;

use super::{
    dto::AddMealRequest,
    repo_types::{MealEntry, MealType},
};
use crate::{
    catalog::FoodItem,
    errors::AppError,
    events::FitnessEvent,
    state::AppState,
    validation::{round1, validate_grams, validate_name, validate_quantity},
};

/// Scales a catalog food by `quantity` servings.
pub fn meal_from_food(
    food: &FoodItem,
    quantity: f64,
    meal_type: MealType,
    now: OffsetDateTime,
) -> Result<MealEntry, AppError> {
    let quantity = validate_quantity(quantity)?;
    let calories = (food.calories * quantity).round();
    if calories > f64::from(u32::MAX) {
        return Err(AppError::validation("Quantity is too large"));
    }
    Ok(MealEntry {
        id: Uuid::new_v4(),
        name: food.name.to_string(),
        calories: calories as u32,
        protein: round1(food.protein * quantity),
        carbs: round1(food.carbs * quantity),
        fat: round1(food.fat * quantity),
        quantity,
        meal_type,
        logged_at: now,
        date: now.date(),
    })
}

pub fn meal_from_request(req: AddMealRequest, now: OffsetDateTime) -> Result<MealEntry, AppError> {
    Ok(MealEntry {
        id: Uuid::new_v4(),
        name: validate_name(&req.name)?,
        calories: req.calories,
        protein: validate_grams("Protein", req.protein)?,
        carbs: validate_grams("Carbs", req.carbs)?,
        fat: validate_grams("Fat", req.fat)?,
        quantity: validate_quantity(req.quantity)?,
        meal_type: req.meal_type,
        logged_at: now,
        date: now.date(),
    })
}

pub async fn record_meal(st: &AppState, meal: MealEntry) -> Result<MealEntry, AppError> {
    let meal = st.meals.append(meal).await?;
    info!(meal_id = %meal.id, name = %meal.name, calories = meal.calories, "meal logged");
    st.events.publish(FitnessEvent::MealAdded(meal.clone()));
    Ok(meal)
}

pub async fn meals_for_day(st: &AppState, date: Date) -> Result<Vec<MealEntry>, AppError> {
    let meals = st.meals.list_by_date(date).await?;
    debug!(%date, count = meals.len(), "meals listed");
    Ok(meals)
}

pub async fn delete_meal(st: &AppState, id: Uuid) -> Result<MealEntry, AppError> {
    let removed = st
        .meals
        .delete_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Meal not found"))?;
    info!(meal_id = %id, "meal deleted");
    st.events.publish(FitnessEvent::MealRemoved { id });
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_food;
    use time::macros::datetime;

    #[test]
    fn chicken_breast_single_serving() {
        let now = datetime!(2023-05-19 12:30 UTC);
        let meal = meal_from_food(find_food(1).unwrap(), 1.0, MealType::Lunch, now).unwrap();
        assert_eq!(meal.name, "Chicken Breast");
        assert_eq!(meal.calories, 165);
        assert_eq!(meal.protein, 31.0);
        assert_eq!(meal.carbs, 0.0);
        assert_eq!(meal.fat, 3.6);
        assert_eq!(meal.date, now.date());
    }

    #[test]
    fn scales_and_rounds_by_quantity() {
        let now = datetime!(2023-05-19 08:00 UTC);
        let meal = meal_from_food(find_food(2).unwrap(), 1.5, MealType::Dinner, now).unwrap();
        assert_eq!(meal.calories, 168);
        assert_eq!(meal.protein, 3.9);
        assert_eq!(meal.carbs, 35.3);
        assert_eq!(meal.fat, 1.4);
        assert_eq!(meal.quantity, 1.5);
    }

    #[test]
    fn rejects_non_positive_quantity() {
        let now = datetime!(2023-05-19 08:00 UTC);
        let food = find_food(1).unwrap();
        for q in [0.0, -2.0, f64::NAN] {
            let err = meal_from_food(food, q, MealType::Snack, now).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }

    #[test]
    fn raw_request_is_validated() {
        let now = datetime!(2023-05-19 08:00 UTC);
        let req = AddMealRequest {
            name: "  ".into(),
            calories: 100,
            protein: 1.0,
            carbs: 1.0,
            fat: 1.0,
            quantity: 1.0,
            meal_type: MealType::Snack,
        };
        assert!(matches!(meal_from_request(req, now), Err(AppError::Validation(_))));

        let req = AddMealRequest {
            name: "Toast".into(),
            calories: 100,
            protein: -1.0,
            carbs: 1.0,
            fat: 1.0,
            quantity: 1.0,
            meal_type: MealType::Breakfast,
        };
        assert!(matches!(meal_from_request(req, now), Err(AppError::Validation(_))));
    }

    #[test]
    fn oversized_raw_macros_are_rejected() {
        let now = datetime!(2023-05-19 08:00 UTC);
        let req = AddMealRequest {
            name: "Mystery shake".into(),
            calories: 500,
            protein: 1e308,
            carbs: 10.0,
            fat: 1.0,
            quantity: 1.0,
            meal_type: MealType::Snack,
        };
        assert!(matches!(meal_from_request(req, now), Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn delete_twice_fails_second_time() {
        let st = AppState::fake();
        let now = datetime!(2023-05-19 08:00 UTC);
        let meal = meal_from_food(find_food(7).unwrap(), 2.0, MealType::Breakfast, now).unwrap();
        let meal = record_meal(&st, meal).await.unwrap();

        assert_eq!(delete_meal(&st, meal.id).await.unwrap().id, meal.id);
        assert!(matches!(
            delete_meal(&st, meal.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            delete_meal(&st, Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn recording_publishes_event() {
        let st = AppState::fake();
        let mut rx = st.events.subscribe();
        let now = datetime!(2023-05-19 08:00 UTC);
        let meal = meal_from_food(find_food(9).unwrap(), 1.0, MealType::Snack, now).unwrap();
        let meal = record_meal(&st, meal).await.unwrap();

        match rx.recv().await.unwrap() {
            FitnessEvent::MealAdded(got) => assert_eq!(got.id, meal.id),
            other => panic!("unexpected event {:?}", other),
        }
        assert_eq!(meals_for_day(&st, now.date()).await.unwrap().len(), 1);
    }
}
