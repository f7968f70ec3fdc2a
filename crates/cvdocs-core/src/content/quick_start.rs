use super::{NamedSnippet, Section};
use crate::snippet::SnippetSet;

pub(super) fn snippets() -> Vec<NamedSnippet> {
    vec![
        NamedSnippet::new("install", Section::QuickStart, installation()),
        NamedSnippet::new("client", Section::QuickStart, client_initialization()),
        NamedSnippet::new("first-request", Section::QuickStart, first_request()),
    ]
}

fn installation() -> SnippetSet {
    SnippetSet::multi([
        (
            "javascript",
            r#"# Install via npm
npm install @stellantis/connected-vehicles

# Install via yarn
yarn add @stellantis/connected-vehicles"#,
        ),
        (
            "python",
            r#"# Install via pip
pip install stellantis-connected-vehicles

# Install via conda
conda install -c stellantis stellantis-connected-vehicles"#,
        ),
        (
            "java",
            r#"<!-- Add to your pom.xml -->
<dependency>
  <groupId>com.stellantis</groupId>
  <artifactId>connected-vehicles-sdk</artifactId>
  <version>1.0.0</version>
</dependency>"#,
        ),
    ])
    .with_title("SDK Installation")
}

fn client_initialization() -> SnippetSet {
    SnippetSet::multi([
        (
            "javascript",
            r#"import { StellantisCV } from '@stellantis/connected-vehicles';

// Initialize client
const client = new StellantisCV({
  clientId: process.env.STELLANTIS_CLIENT_ID,
  clientSecret: process.env.STELLANTIS_CLIENT_SECRET,
  environment: 'sandbox' // Use 'production' for live data
});

// The SDK handles authentication automatically
console.log('Client initialized successfully');"#,
        ),
        (
            "python",
            r#"from stellantis_cv import StellantisCV
import os

# Initialize client
client = StellantisCV(
    client_id=os.getenv('STELLANTIS_CLIENT_ID'),
    client_secret=os.getenv('STELLANTIS_CLIENT_SECRET'),
    environment='sandbox'  # Use 'production' for live data
)

print('Client initialized successfully')"#,
        ),
        (
            "curl",
            r#"# Get access token
curl -X POST "https://api-sandbox.stellantis-cv.com/auth/token" \
  -H "Content-Type: application/json" \
  -d '{
    "client_id": "your_client_id",
    "client_secret": "your_client_secret",
    "grant_type": "client_credentials"
  }'

# Response
{
  "access_token": "eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9...",
  "token_type": "Bearer",
  "expires_in": 3600
}"#,
        ),
    ])
    .with_title("Client Initialization")
}

fn first_request() -> SnippetSet {
    SnippetSet::multi([
        (
            "javascript",
            r#"// Get list of vehicles
const vehicles = await client.vehicles.list();
console.log('Available vehicles:', vehicles);

// Get specific vehicle information
const vehicleId = vehicles.data[0].id;
const vehicle = await client.vehicles.get(vehicleId);

console.log('Vehicle details:', {
  vin: vehicle.vin,
  make: vehicle.make,
  model: vehicle.model,
  year: vehicle.year
});

// Get vehicle location
const location = await client.vehicles.getLocation(vehicleId);
console.log('Current location:', {
  latitude: location.latitude,
  longitude: location.longitude,
  timestamp: location.timestamp
});"#,
        ),
        (
            "python",
            r#"# Get list of vehicles
vehicles = client.vehicles.list()
print(f'Available vehicles: {vehicles}')

# Get specific vehicle information
vehicle_id = vehicles['data'][0]['id']
vehicle = client.vehicles.get(vehicle_id)

print(f'Vehicle details: {vehicle.vin}, {vehicle.make} {vehicle.model} ({vehicle.year})')

# Get vehicle location
location = client.vehicles.get_location(vehicle_id)
print(f'Current location: {location.latitude}, {location.longitude}')"#,
        ),
        (
            "curl",
            r#"# Get list of vehicles
curl -X GET "https://api-sandbox.stellantis-cv.com/v1/vehicles" \
  -H "Authorization: Bearer YOUR_ACCESS_TOKEN"

# Get specific vehicle
curl -X GET "https://api-sandbox.stellantis-cv.com/v1/vehicles/VEHICLE_ID" \
  -H "Authorization: Bearer YOUR_ACCESS_TOKEN"

# Get vehicle location
curl -X GET "https://api-sandbox.stellantis-cv.com/v1/vehicles/VEHICLE_ID/location" \
  -H "Authorization: Bearer YOUR_ACCESS_TOKEN""#,
        ),
    ])
    .with_title("Vehicle Data Request")
}
