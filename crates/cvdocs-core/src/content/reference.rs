use super::{NamedSnippet, Section};
use crate::snippet::SnippetSet;

pub(super) fn snippets() -> Vec<NamedSnippet> {
    vec![
        NamedSnippet::new("vehicles-list-request", Section::Reference, vehicles_list_request()),
        NamedSnippet::new("vehicles-list-response", Section::Reference, vehicles_list_response()),
        NamedSnippet::new("location-request", Section::Reference, location_request()),
        NamedSnippet::new("location-response", Section::Reference, location_response()),
    ]
}

fn vehicles_list_request() -> SnippetSet {
    SnippetSet::single(
        r#"GET /v1/vehicles
Authorization: Bearer {access_token}
Content-Type: application/json"#,
        "http",
    )
    .with_title("List Vehicles Request")
}

fn vehicles_list_response() -> SnippetSet {
    SnippetSet::single(
        r#"{
  "data": [
    {
      "id": "veh_123456789",
      "vin": "1HGBH41JXMN109186",
      "make": "Peugeot",
      "model": "3008",
      "year": 2023,
      "color": "Metallic Blue",
      "status": "active",
      "location": {
        "latitude": 48.8566,
        "longitude": 2.3522,
        "address": "Paris, France"
      },
      "created_at": "2023-01-15T10:30:00Z",
      "updated_at": "2023-11-01T14:22:00Z"
    }
  ],
  "pagination": {
    "page": 1,
    "per_page": 20,
    "total": 1,
    "total_pages": 1
  }
}"#,
        "json",
    )
    .with_title("List Vehicles Response")
}

fn location_request() -> SnippetSet {
    SnippetSet::multi([
        (
            "curl",
            r#"curl -X GET "https://api.stellantis-cv.com/v1/vehicles/veh_123456789/location" \
  -H "Authorization: Bearer {access_token}""#,
        ),
        (
            "javascript",
            r#"const location = await client.vehicles.getLocation('veh_123456789');
console.log('Vehicle location:', location);"#,
        ),
        (
            "python",
            r#"location = client.vehicles.get_location('veh_123456789')
print(f'Vehicle location: {location}')"#,
        ),
    ])
    .with_title("Get Vehicle Location")
}

fn location_response() -> SnippetSet {
    SnippetSet::single(
        r#"{
  "data": {
    "latitude": 48.8566,
    "longitude": 2.3522,
    "altitude": 35.5,
    "accuracy": 5.2,
    "speed": 0,
    "heading": 180,
    "address": {
      "street": "Avenue des Champs-Élysées",
      "city": "Paris",
      "state": "Île-de-France",
      "country": "France",
      "postal_code": "75008"
    },
    "timestamp": "2023-11-01T14:22:15Z"
  }
}"#,
        "json",
    )
    .with_title("Vehicle Location Response")
}
