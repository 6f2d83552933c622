use sqlx::PgConnection;
use time::Date;

use kernel::interface::query::RentalQuery;
use kernel::interface::update::RentalModifier;
use kernel::prelude::entity::{
    CategoryId, CategoryName, CustomerId, CustomerName, DaysRented, DelayFee, GameId, GameName,
    OriginalPrice, PricePerDay, RentDate, Rental, RentalDetail, RentalDraft, RentalId,
    ReturnDate,
};
use kernel::KernelError;

use crate::database::postgres::PostgresConnection;
use crate::error::ConvertError;

pub struct PostgresRentalRepository;

#[async_trait::async_trait]
impl RentalQuery<PostgresConnection> for PostgresRentalRepository {
    async fn find_all(
        &self,
        con: &mut PostgresConnection,
    ) -> error_stack::Result<Vec<RentalDetail>, KernelError> {
        PgRentalInternal::find_all(con).await
    }

    async fn find_by_customer_id(
        &self,
        con: &mut PostgresConnection,
        customer_id: &CustomerId,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        PgRentalInternal::find_by_customer_id(con, customer_id).await
    }

    async fn find_by_game_id(
        &self,
        con: &mut PostgresConnection,
        game_id: &GameId,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        PgRentalInternal::find_by_game_id(con, game_id).await
    }

    async fn find_with_price(
        &self,
        con: &mut PostgresConnection,
        id: &RentalId,
    ) -> error_stack::Result<Option<(Rental, PricePerDay)>, KernelError> {
        PgRentalInternal::find_with_price(con, id).await
    }

    async fn count_active_by_game_id(
        &self,
        con: &mut PostgresConnection,
        game_id: &GameId,
    ) -> error_stack::Result<i64, KernelError> {
        PgRentalInternal::count_active_by_game_id(con, game_id).await
    }
}

#[async_trait::async_trait]
impl RentalModifier<PostgresConnection> for PostgresRentalRepository {
    async fn create(
        &self,
        con: &mut PostgresConnection,
        rental: &RentalDraft,
    ) -> error_stack::Result<RentalId, KernelError> {
        PgRentalInternal::create(con, rental).await
    }

    async fn mark_returned(
        &self,
        con: &mut PostgresConnection,
        id: &RentalId,
        return_date: &ReturnDate,
        delay_fee: Option<&DelayFee>,
    ) -> error_stack::Result<bool, KernelError> {
        PgRentalInternal::mark_returned(con, id, return_date, delay_fee).await
    }
}

#[derive(sqlx::FromRow)]
struct RentalRow {
    id: i32,
    customer_id: i32,
    game_id: i32,
    rent_date: Date,
    days_rented: i32,
    return_date: Option<Date>,
    original_price: i64,
    delay_fee: Option<i64>,
}

impl From<RentalRow> for Rental {
    fn from(row: RentalRow) -> Self {
        Rental::new(
            RentalId::new(row.id),
            CustomerId::new(row.customer_id),
            GameId::new(row.game_id),
            RentDate::new(row.rent_date),
            DaysRented::new(row.days_rented),
            row.return_date.map(ReturnDate::new),
            OriginalPrice::new(row.original_price),
            row.delay_fee.map(DelayFee::new),
        )
    }
}

#[derive(sqlx::FromRow)]
struct RentalDetailRow {
    #[sqlx(flatten)]
    rental: RentalRow,
    customer_name: String,
    game_name: String,
    category_id: i32,
    category_name: String,
}

impl From<RentalDetailRow> for RentalDetail {
    fn from(row: RentalDetailRow) -> Self {
        RentalDetail::new(
            Rental::from(row.rental),
            CustomerName::new(row.customer_name),
            GameName::new(row.game_name),
            CategoryId::new(row.category_id),
            CategoryName::new(row.category_name),
        )
    }
}

#[derive(sqlx::FromRow)]
struct PricedRentalRow {
    #[sqlx(flatten)]
    rental: RentalRow,
    price_per_day: i64,
}

pub(in crate::database) struct PgRentalInternal;

impl PgRentalInternal {
    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<RentalDetail>, KernelError> {
        let rows = sqlx::query_as::<_, RentalDetailRow>(
            // language=postgresql
            r#"
            SELECT
                rentals.id,
                rentals.customer_id,
                rentals.game_id,
                rentals.rent_date,
                rentals.days_rented,
                rentals.return_date,
                rentals.original_price,
                rentals.delay_fee,
                customers.name AS customer_name,
                games.name AS game_name,
                games.category_id,
                categories.name AS category_name
            FROM
                rentals
                JOIN customers ON customers.id = rentals.customer_id
                JOIN games ON games.id = rentals.game_id
                JOIN categories ON categories.id = games.category_id
            ORDER BY
                rentals.id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(RentalDetail::from).collect())
    }

    async fn find_by_customer_id(
        con: &mut PgConnection,
        customer_id: &CustomerId,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        let rows = sqlx::query_as::<_, RentalRow>(
            // language=postgresql
            r#"
            SELECT id, customer_id, game_id, rent_date, days_rented, return_date, original_price, delay_fee
            FROM rentals
            WHERE customer_id = $1
            ORDER BY id
            "#,
        )
        .bind(customer_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Rental::from).collect())
    }

    async fn find_by_game_id(
        con: &mut PgConnection,
        game_id: &GameId,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        let rows = sqlx::query_as::<_, RentalRow>(
            // language=postgresql
            r#"
            SELECT id, customer_id, game_id, rent_date, days_rented, return_date, original_price, delay_fee
            FROM rentals
            WHERE game_id = $1
            ORDER BY id
            "#,
        )
        .bind(game_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Rental::from).collect())
    }

    async fn find_with_price(
        con: &mut PgConnection,
        id: &RentalId,
    ) -> error_stack::Result<Option<(Rental, PricePerDay)>, KernelError> {
        let row = sqlx::query_as::<_, PricedRentalRow>(
            // language=postgresql
            r#"
            SELECT
                rentals.id,
                rentals.customer_id,
                rentals.game_id,
                rentals.rent_date,
                rentals.days_rented,
                rentals.return_date,
                rentals.original_price,
                rentals.delay_fee,
                games.price_per_day
            FROM
                rentals
                JOIN games ON games.id = rentals.game_id
            WHERE
                rentals.id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(|row| {
            (
                Rental::from(row.rental),
                PricePerDay::new(row.price_per_day),
            )
        }))
    }

    async fn count_active_by_game_id(
        con: &mut PgConnection,
        game_id: &GameId,
    ) -> error_stack::Result<i64, KernelError> {
        let count = sqlx::query_scalar::<_, i64>(
            // language=postgresql
            r#"
            SELECT COUNT(*)
            FROM rentals
            WHERE game_id = $1 AND return_date IS NULL
            "#,
        )
        .bind(game_id.as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(count)
    }

    async fn create(
        con: &mut PgConnection,
        rental: &RentalDraft,
    ) -> error_stack::Result<RentalId, KernelError> {
        let id = sqlx::query_scalar::<_, i32>(
            // language=postgresql
            r#"
            INSERT INTO rentals (customer_id, game_id, rent_date, days_rented, original_price)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(rental.customer_id().as_ref())
        .bind(rental.game_id().as_ref())
        .bind(rental.rent_date().as_ref())
        .bind(rental.days_rented().as_ref())
        .bind(rental.original_price().as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(RentalId::new(id))
    }

    async fn mark_returned(
        con: &mut PgConnection,
        id: &RentalId,
        return_date: &ReturnDate,
        delay_fee: Option<&DelayFee>,
    ) -> error_stack::Result<bool, KernelError> {
        let result = sqlx::query(
            // language=postgresql
            r#"
            UPDATE rentals
            SET return_date = $2, delay_fee = $3
            WHERE id = $1 AND return_date IS NULL
            "#,
        )
        .bind(id.as_ref())
        .bind(return_date.as_ref())
        .bind(delay_fee.map(|fee| *fee.as_ref()))
        .execute(con)
        .await
        .convert_error()?;
        Ok(result.rows_affected() == 1)
    }
}
