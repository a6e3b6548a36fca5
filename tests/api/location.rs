use crate::helpers::spawn_app;
use actix_web::http::StatusCode;
use civic_signal::routes::LocationResponse;
use fake::Fake;
use serde_json::json;

#[tokio::test]
async fn location_starts_at_the_configured_centre() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_location().await;

    // Assert
    assert_eq!(StatusCode::OK.as_u16(), response.status().as_u16());
    let location: LocationResponse = response.json().await.expect("Failed to parse location.");
    assert_eq!(location.latitude, app.configuration.municipality.default_latitude);
    assert_eq!(location.longitude, app.configuration.municipality.default_longitude);
    assert_eq!(location.text, "43.83560, 25.96570");
}

#[tokio::test]
async fn put_location_moves_the_marker() {
    // Arrange
    let app = spawn_app().await;
    let latitude = (43.75..=43.90).fake::<f64>();
    let longitude = (25.85..=26.10).fake::<f64>();

    // Act
    let response = app
        .put_location(&json!({ "latitude": latitude, "longitude": longitude }))
        .await;

    // Assert
    assert_eq!(StatusCode::OK.as_u16(), response.status().as_u16());
    let location: LocationResponse = app
        .get_location()
        .await
        .json()
        .await
        .expect("Failed to parse location.");
    assert_eq!(location.latitude, latitude);
    assert_eq!(location.longitude, longitude);
    assert_eq!(location.text, format!("{:.5}, {:.5}", latitude, longitude));
}

#[tokio::test]
async fn put_location_stores_coordinates_exactly_as_sent() {
    // Arrange
    let app = spawn_app().await;
    // Long mantissas that a lossy float parser gets wrong in the last place
    let latitude: f64 = 43.856_271_838_372_15;
    let longitude: f64 = 25.904_627_145_245_474;

    // Act
    app.put_location(&json!({ "latitude": latitude, "longitude": longitude }))
        .await;

    // Assert
    let location: LocationResponse = app.get_location().await.json().await.unwrap();
    assert_eq!(location.latitude.to_bits(), latitude.to_bits());
    assert_eq!(location.longitude.to_bits(), longitude.to_bits());
}

#[tokio::test]
async fn put_location_rejects_invalid_coordinates() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        (json!({ "latitude": 91.0, "longitude": 25.0 }), "latitude above 90"),
        (json!({ "latitude": 43.0, "longitude": -181.0 }), "longitude below -180"),
        (json!({ "latitude": 43.0 }), "missing longitude"),
        (json!({ "latitude": "north", "longitude": 25.0 }), "non-numeric latitude"),
    ];

    for (body, description) in test_cases {
        // Act
        let response = app.put_location(&body).await;

        // Assert
        assert_eq!(
            StatusCode::BAD_REQUEST.as_u16(),
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload had {}.",
            description
        );
    }

    let location: LocationResponse = app.get_location().await.json().await.unwrap();
    assert_eq!(location.text, "43.83560, 25.96570");
}

#[tokio::test]
async fn reset_location_returns_to_the_centre() {
    // Arrange
    let app = spawn_app().await;
    app.put_location(&json!({ "latitude": 43.8862, "longitude": 25.9939 }))
        .await;

    // Act
    let response = app.reset_location().await;

    // Assert
    assert_eq!(StatusCode::OK.as_u16(), response.status().as_u16());
    let location: LocationResponse = response.json().await.unwrap();
    assert_eq!(location.text, "43.83560, 25.96570");
    assert!(app.stub.requests().is_empty());
}
