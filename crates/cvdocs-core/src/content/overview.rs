use super::{NamedSnippet, Section};
use crate::snippet::SnippetSet;

pub(super) fn snippets() -> Vec<NamedSnippet> {
    vec![
        NamedSnippet::new("vehicle-access", Section::Overview, vehicle_access()),
    ]
}

fn vehicle_access() -> SnippetSet {
    SnippetSet::multi([
        (
            "javascript",
            r#"// Initialize the Stellantis Connected Vehicles SDK
import { StellantisCV } from '@stellantis/connected-vehicles';

const client = new StellantisCV({
  clientId: 'your_client_id',
  clientSecret: 'your_client_secret',
  environment: 'production' // or 'sandbox'
});

// Get vehicle information
const vehicle = await client.vehicles.get('vehicle_id');
console.log('Vehicle:', vehicle);

// Get vehicle location
const location = await client.vehicles.getLocation('vehicle_id');
console.log('Location:', location);"#,
        ),
        (
            "python",
            r#"# Initialize the Stellantis Connected Vehicles SDK
from stellantis_cv import StellantisCV

client = StellantisCV(
    client_id='your_client_id',
    client_secret='your_client_secret',
    environment='production'  # or 'sandbox'
)

# Get vehicle information
vehicle = client.vehicles.get('vehicle_id')
print(f'Vehicle: {vehicle}')

# Get vehicle location
location = client.vehicles.get_location('vehicle_id')
print(f'Location: {location}')"#,
        ),
        (
            "curl",
            r#"# Authenticate and get access token
curl -X POST "https://api.stellantis-cv.com/auth/token" \
  -H "Content-Type: application/json" \
  -d '{
    "client_id": "your_client_id",
    "client_secret": "your_client_secret",
    "grant_type": "client_credentials"
  }'

# Get vehicle information
curl -X GET "https://api.stellantis-cv.com/v1/vehicles/vehicle_id" \
  -H "Authorization: Bearer ACCESS_TOKEN""#,
        ),
    ])
    .with_title("Vehicle Data Access Example")
}
