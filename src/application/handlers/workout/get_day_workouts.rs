//! GetDayWorkoutsHandler - Query handler assembling one calendar day of
//! workouts with their exercises and sets.

use std::sync::Arc;

use chrono::{FixedOffset, NaiveDate};
use futures::future::try_join_all;

use crate::application::handlers::require_identity;
use crate::domain::foundation::{AuthenticatedUser, UserId};
use crate::domain::workout::{
    parse_calendar_date, sort_workouts, utc_offset_from_minutes, DayRange, ExerciseView,
    WorkoutError, WorkoutView,
};
use crate::ports::{PlacementRecord, WorkoutReader, WorkoutRecord};

/// Query for one calendar day as seen from the caller's clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayQuery {
    pub date: NaiveDate,
    pub utc_offset: FixedOffset,
}

impl DayQuery {
    pub fn new(date: NaiveDate, utc_offset: FixedOffset) -> Self {
        Self { date, utc_offset }
    }

    /// The UTC calendar day `date`.
    pub fn utc(date: NaiveDate) -> Result<Self, WorkoutError> {
        Ok(Self::new(date, utc_offset_from_minutes(0)?))
    }

    /// Parses a `YYYY-MM-DD` date and a signed offset in minutes east of UTC.
    pub fn parse(date: &str, utc_offset_minutes: i32) -> Result<Self, WorkoutError> {
        Ok(Self::new(
            parse_calendar_date(date)?,
            utc_offset_from_minutes(utc_offset_minutes)?,
        ))
    }

    /// Half-open interval covering the requested day.
    pub fn range(&self) -> Result<DayRange, WorkoutError> {
        Ok(DayRange::for_local_date(self.date, self.utc_offset)?)
    }
}

/// Handler for the day view: workouts → exercises → sets.
///
/// Placements of every workout, and sets of every placement, are fetched
/// concurrently. The tree is re-sorted by `order` and `set_number` once all
/// reads finished, and the first failed read fails the whole call.
pub struct GetDayWorkoutsHandler {
    reader: Arc<dyn WorkoutReader>,
}

impl GetDayWorkoutsHandler {
    pub fn new(reader: Arc<dyn WorkoutReader>) -> Self {
        Self { reader }
    }

    /// Assembles the day for a verified user.
    ///
    /// Fails with [`WorkoutError::Unauthorized`] before touching the store
    /// when no identity is supplied.
    #[tracing::instrument(skip(self, user, query), fields(date = %query.date, offset = %query.utc_offset))]
    pub async fn handle(
        &self,
        user: Option<&AuthenticatedUser>,
        query: DayQuery,
    ) -> Result<Vec<WorkoutView>, WorkoutError> {
        let user = require_identity(user)?;
        self.assemble_day(&user.id, query).await
    }

    /// Dashboard variant: an anonymous caller gets an empty day instead of
    /// [`WorkoutError::Unauthorized`].
    pub async fn handle_allowing_guest(
        &self,
        user: Option<&AuthenticatedUser>,
        query: DayQuery,
    ) -> Result<Vec<WorkoutView>, WorkoutError> {
        match user {
            Some(user) => self.assemble_day(&user.id, query).await,
            None => {
                tracing::debug!("Guest day request, returning empty list");
                Ok(Vec::new())
            }
        }
    }

    async fn assemble_day(
        &self,
        user_id: &UserId,
        query: DayQuery,
    ) -> Result<Vec<WorkoutView>, WorkoutError> {
        let range = query.range()?;
        let workouts = self.reader.list_started_within(user_id, &range).await?;
        tracing::debug!(count = workouts.len(), "Workouts found for day");

        let mut views = try_join_all(
            workouts
                .into_iter()
                .map(|workout| self.assemble_workout(user_id, workout)),
        )
        .await?;
        sort_workouts(&mut views);
        Ok(views)
    }

    async fn assemble_workout(
        &self,
        user_id: &UserId,
        workout: WorkoutRecord,
    ) -> Result<WorkoutView, WorkoutError> {
        let placements = self.reader.list_placements(user_id, workout.id).await?;
        let exercises = try_join_all(
            placements
                .into_iter()
                .map(|placement| self.assemble_exercise(user_id, placement)),
        )
        .await?;
        Ok(WorkoutView::assemble(workout, exercises))
    }

    async fn assemble_exercise(
        &self,
        user_id: &UserId,
        placement: PlacementRecord,
    ) -> Result<ExerciseView, WorkoutError> {
        let sets = self.reader.list_sets(user_id, placement.id).await?;
        Ok(ExerciseView::assemble(placement, sets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryWorkoutStore;
    use crate::domain::foundation::{
        DomainError, ErrorCode, ExerciseId, SetId, Timestamp, WorkoutExerciseId, WorkoutId,
    };
    use crate::ports::SetRecord;
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration as StdDuration;

    fn alice() -> AuthenticatedUser {
        AuthenticatedUser::with_id(UserId::new("alice").unwrap())
    }

    fn bob() -> AuthenticatedUser {
        AuthenticatedUser::with_id(UserId::new("bob").unwrap())
    }

    fn march_10() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap())
    }

    fn handler(store: &InMemoryWorkoutStore) -> GetDayWorkoutsHandler {
        GetDayWorkoutsHandler::new(Arc::new(store.clone()))
    }

    /// Reader that counts calls and fails on demand.
    struct CountingReader {
        calls: AtomicUsize,
        fail_sets: bool,
    }

    impl CountingReader {
        fn new(fail_sets: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_sets,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl WorkoutReader for CountingReader {
        async fn list_by_user(&self, _user_id: &UserId) -> Result<Vec<WorkoutRecord>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        }

        async fn list_started_within(
            &self,
            user_id: &UserId,
            _range: &DayRange,
        ) -> Result<Vec<WorkoutRecord>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![WorkoutRecord {
                id: WorkoutId::new(1),
                user_id: user_id.clone(),
                name: None,
                started_at: utc(2024, 3, 10, 9, 0),
                completed_at: None,
            }])
        }

        async fn find_for_user(
            &self,
            _user_id: &UserId,
            _id: WorkoutId,
        ) -> Result<Option<WorkoutRecord>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        }

        async fn list_placements(
            &self,
            _user_id: &UserId,
            workout_id: WorkoutId,
        ) -> Result<Vec<PlacementRecord>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok((1..=3)
                .map(|i| PlacementRecord {
                    id: WorkoutExerciseId::new(i),
                    workout_id,
                    exercise_id: ExerciseId::new(i),
                    exercise_name: format!("Exercise {}", i),
                    order: i,
                })
                .collect())
        }

        async fn list_sets(
            &self,
            _user_id: &UserId,
            workout_exercise_id: WorkoutExerciseId,
        ) -> Result<Vec<SetRecord>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_sets && workout_exercise_id.value() == 2 {
                return Err(DomainError::database("Failed to list sets", "connection reset"));
            }
            // Earlier placements answer last, so completion order is reversed.
            let delay = 40 - 10 * u64::try_from(workout_exercise_id.value()).unwrap();
            tokio::time::sleep(StdDuration::from_millis(delay)).await;
            Ok(vec![SetRecord {
                id: SetId::new(workout_exercise_id.value()),
                workout_exercise_id,
                set_number: 1,
                reps: Some(10),
                weight: None,
            }])
        }
    }

    #[tokio::test]
    async fn rejects_anonymous_caller_before_reading() {
        let reader = Arc::new(CountingReader::new(false));
        let handler = GetDayWorkoutsHandler::new(reader.clone());

        let result = handler.handle(None, DayQuery::utc(march_10()).unwrap()).await;

        assert_eq!(result, Err(WorkoutError::Unauthorized));
        assert_eq!(reader.calls(), 0);
    }

    #[tokio::test]
    async fn guest_path_returns_empty_day() {
        let reader = Arc::new(CountingReader::new(false));
        let handler = GetDayWorkoutsHandler::new(reader.clone());

        let result = handler
            .handle_allowing_guest(None, DayQuery::utc(march_10()).unwrap())
            .await
            .unwrap();

        assert!(result.is_empty());
        assert_eq!(reader.calls(), 0);
    }

    #[tokio::test]
    async fn guest_path_with_identity_assembles_the_day() {
        let store = InMemoryWorkoutStore::new();
        let user = alice();
        store
            .add_workout(&user.id, Some("Morning"), utc(2024, 3, 10, 7, 0))
            .await;

        let result = handler(&store)
            .handle_allowing_guest(Some(&user), DayQuery::utc(march_10()).unwrap())
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
    }

    #[tokio::test]
    async fn assembles_two_exercises_with_three_and_one_sets() {
        let store = InMemoryWorkoutStore::new();
        let user = alice();
        let squat = store.add_exercise(&user.id, "Squat").await;
        let press = store.add_exercise(&user.id, "Overhead Press").await;
        let workout = store
            .add_workout(&user.id, Some("Strength"), utc(2024, 3, 10, 8, 30))
            .await;
        let second = store.add_placement(workout, press, 2).await;
        let first = store.add_placement(workout, squat, 1).await;
        for n in [3, 1, 2] {
            store.add_set(first, n, Some(5), None).await;
        }
        store.add_set(second, 1, Some(8), None).await;

        let result = handler(&store)
            .handle(Some(&user), DayQuery::utc(march_10()).unwrap())
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        let shape: Vec<usize> = result[0].exercises.iter().map(|e| e.sets.len()).collect();
        assert_eq!(shape, vec![3, 1]);
        assert_eq!(result[0].exercises[0].name, "Squat");
        let numbers: Vec<i32> = result[0].exercises[0]
            .sets
            .iter()
            .map(|s| s.set_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn result_order_does_not_depend_on_completion_order() {
        let handler = GetDayWorkoutsHandler::new(Arc::new(CountingReader::new(false)));

        let result = handler
            .handle(Some(&alice()), DayQuery::utc(march_10()).unwrap())
            .await
            .unwrap();

        let orders: Vec<i32> = result[0].exercises.iter().map(|e| e.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn failed_child_read_fails_the_whole_call() {
        let handler = GetDayWorkoutsHandler::new(Arc::new(CountingReader::new(true)));

        let result = handler
            .handle(Some(&alice()), DayQuery::utc(march_10()).unwrap())
            .await;

        assert!(matches!(result, Err(WorkoutError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn store_failure_is_not_an_empty_day() {
        let store = InMemoryWorkoutStore::new();
        store.fail_reads("database is down").await;

        let result = handler(&store)
            .handle(Some(&alice()), DayQuery::utc(march_10()).unwrap())
            .await;

        assert_eq!(
            result,
            Err(WorkoutError::StoreUnavailable("database is down".to_string()))
        );
    }

    #[tokio::test]
    async fn empty_day_is_success() {
        let store = InMemoryWorkoutStore::new();

        let result = handler(&store)
            .handle(Some(&alice()), DayQuery::utc(march_10()).unwrap())
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn other_users_workouts_never_appear() {
        let store = InMemoryWorkoutStore::new();
        let (alice, bob) = (alice(), bob());
        store
            .add_workout(&alice.id, Some("Alice"), utc(2024, 3, 10, 9, 0))
            .await;
        store
            .add_workout(&bob.id, Some("Bob"), utc(2024, 3, 10, 10, 0))
            .await;

        let result = handler(&store)
            .handle(Some(&alice), DayQuery::utc(march_10()).unwrap())
            .await
            .unwrap();

        let names: Vec<Option<&str>> = result.iter().map(|w| w.name.as_deref()).collect();
        assert_eq!(names, vec![Some("Alice")]);
    }

    #[tokio::test]
    async fn day_boundary_is_half_open() {
        let store = InMemoryWorkoutStore::new();
        let user = alice();
        let midnight = utc(2024, 3, 10, 0, 0);
        store.add_workout(&user.id, Some("at start"), midnight).await;
        store
            .add_workout(&user.id, Some("last ms"), midnight.offset_by(Duration::milliseconds(86_399_999)))
            .await;
        store
            .add_workout(&user.id, Some("next midnight"), midnight.offset_by(Duration::days(1)))
            .await;
        store
            .add_workout(&user.id, Some("day before"), midnight.offset_by(Duration::milliseconds(-1)))
            .await;

        let result = handler(&store)
            .handle(Some(&user), DayQuery::utc(march_10()).unwrap())
            .await
            .unwrap();

        let names: Vec<Option<&str>> = result.iter().map(|w| w.name.as_deref()).collect();
        assert_eq!(names, vec![Some("at start"), Some("last ms")]);
    }

    #[tokio::test]
    async fn local_offset_shifts_the_day() {
        let store = InMemoryWorkoutStore::new();
        let user = alice();
        // 23:30 on March 9th UTC is 00:30 on March 10th at UTC+01:00.
        store
            .add_workout(&user.id, Some("late"), utc(2024, 3, 9, 23, 30))
            .await;

        let in_utc = handler(&store)
            .handle(Some(&user), DayQuery::parse("2024-03-10", 0).unwrap())
            .await
            .unwrap();
        let in_cet = handler(&store)
            .handle(Some(&user), DayQuery::parse("2024-03-10", 60).unwrap())
            .await
            .unwrap();

        assert!(in_utc.is_empty());
        assert_eq!(in_cet.len(), 1);
    }

    #[tokio::test]
    async fn workouts_are_ordered_by_start_time() {
        let store = InMemoryWorkoutStore::new();
        let user = alice();
        store
            .add_workout(&user.id, Some("evening"), utc(2024, 3, 10, 19, 0))
            .await;
        store
            .add_workout(&user.id, Some("morning"), utc(2024, 3, 10, 6, 0))
            .await;

        let result = handler(&store)
            .handle(Some(&user), DayQuery::utc(march_10()).unwrap())
            .await
            .unwrap();

        let names: Vec<Option<&str>> = result.iter().map(|w| w.name.as_deref()).collect();
        assert_eq!(names, vec![Some("morning"), Some("evening")]);
    }

    #[test]
    fn parse_rejects_malformed_date_and_offset() {
        assert!(matches!(
            DayQuery::parse("10/03/2024", 0),
            Err(WorkoutError::InvalidInput(_))
        ));
        assert!(matches!(
            DayQuery::parse("2024-03-10", 15 * 60),
            Err(WorkoutError::InvalidInput(_))
        ));
    }
}
