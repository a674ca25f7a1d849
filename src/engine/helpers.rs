use super::BookingTable;

use uuid::Uuid;

use crate::{
    entities::Booking,
    error::{invalid_input_error, Error},
};

#[tracing::instrument(skip(table))]
pub async fn fetch_booking(table: &BookingTable, id: &Uuid) -> Result<Booking, Error> {
    let bookings = table.lock().await;
    let booking = bookings.get(id).ok_or_else(invalid_input_error)?;

    Ok(booking.clone())
}

#[tracing::instrument(skip(table, booking), fields(id = %booking.id))]
pub async fn insert_booking(table: &BookingTable, booking: &Booking) {
    table.lock().await.insert(booking.id, booking.clone());
}

/// Applies `f` to the stored booking while holding the table lock. The
/// booking is left unchanged when `f` fails.
#[tracing::instrument(skip(table, f))]
pub async fn update_booking<T, F>(table: &BookingTable, id: &Uuid, f: F) -> Result<(T, Booking), Error>
where
    F: FnOnce(&mut Booking) -> Result<T, Error>,
{
    let mut bookings = table.lock().await;
    let stored = bookings.get_mut(id).ok_or_else(invalid_input_error)?;

    let mut booking = stored.clone();
    let output = f(&mut booking)?;
    *stored = booking.clone();

    Ok((output, booking))
}
